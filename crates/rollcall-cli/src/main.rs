use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use rollcall::modules::admin::service::AdminService;
use rollcall_cli::seeder::{self, SeedConfig};
use rollcall_cli::stats::classroom_stats;
use rollcall_config::DatabaseConfig;
use rollcall_db::{PgPool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "rollcall-cli")]
#[command(about = "Rollcall CLI - Administrative tools for Rollcall", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Remove every teacher, student and class membership
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Register fake teachers and students
    Seed {
        /// Number of teachers to create
        #[arg(short = 't', long, default_value = "5")]
        teachers: usize,

        /// Size of the student pool
        #[arg(short = 's', long, default_value = "50")]
        students: usize,

        /// Number of students registered under each teacher
        #[arg(short = 'k', long, default_value = "10")]
        per_teacher: usize,
    },
    /// Print row counts
    Stats,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config)
        .await
        .with_context(|| format!("Failed to connect to {}", config.redacted()))?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Reset { yes } => handle_reset(&pool, yes).await,
        Commands::Seed {
            teachers,
            students,
            per_teacher,
        } => handle_seed(&pool, teachers, students, per_teacher).await,
        Commands::Stats => handle_stats(&pool).await,
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    run_migrations(pool).await?;
    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_reset(pool: &PgPool, yes: bool) -> anyhow::Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt("Delete all teachers, students and class memberships?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

    if !confirmed {
        println!("Aborted");
        return Ok(());
    }

    AdminService::reset(pool)
        .await
        .map_err(|e| anyhow::anyhow!(e.message()))?;
    println!("✅ Classroom data cleared");
    Ok(())
}

async fn handle_seed(
    pool: &PgPool,
    teachers: usize,
    students: usize,
    per_teacher: usize,
) -> anyhow::Result<()> {
    let config = SeedConfig::new(teachers, students).with_students_per_teacher(per_teacher);
    seeder::seed_classes(pool, &config).await?;
    Ok(())
}

async fn handle_stats(pool: &PgPool) -> anyhow::Result<()> {
    let stats = classroom_stats(pool)
        .await
        .context("Failed to count classroom data")?;

    println!("Teachers:           {}", stats.teachers);
    println!("Students:           {}", stats.students);
    println!("Suspended students: {}", stats.suspended_students);
    println!("Class memberships:  {}", stats.memberships);
    Ok(())
}
