use anyhow::anyhow;
use fake::Fake;
use fake::faker::internet::en::FreeEmailProvider;
use fake::faker::name::en::{FirstName, LastName};
use rollcall::modules::classes::service::ClassService;
use rollcall_models::RegisterStudentsDto;
use sqlx::PgPool;
use std::time::Instant;

use super::models::{ClassSeed, SeedConfig};

/// `first.last<index>@provider`, lowercased. The index keeps emails unique.
fn fake_email(role: &str, index: usize) -> String {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    let provider: String = FreeEmailProvider().fake();

    format!("{}{}.{}.{}@{}", role, index, first, last, provider)
        .to_lowercase()
        .replace(['\'', ' '], "")
}

/// Builds the classes to register.
///
/// Teacher `i` gets a contiguous window of the student pool starting at
/// `i * class_size`, wrapping around, so neighbouring classes overlap once
/// the pool runs out.
pub fn generate_classes(config: &SeedConfig) -> Vec<ClassSeed> {
    let students: Vec<String> = (0..config.students)
        .map(|i| fake_email("student", i))
        .collect();
    let class_size = config.class_size();

    (0..config.teachers)
        .map(|i| {
            let start = i * class_size;
            let class = (0..class_size)
                .map(|offset| students[(start + offset) % students.len()].clone())
                .collect();

            ClassSeed {
                teacher: fake_email("teacher", i),
                students: class,
            }
        })
        .collect()
}

/// Registers generated classes and returns how many memberships were created.
pub async fn seed_classes(db: &PgPool, config: &SeedConfig) -> anyhow::Result<usize> {
    let start_time = Instant::now();
    println!(
        "🏫 Seeding {} teachers with {} students each...",
        config.teachers,
        config.class_size()
    );

    let mut memberships = 0;
    for class in generate_classes(config) {
        let dto = RegisterStudentsDto::from(class);
        memberships += ClassService::register_students(db, &dto)
            .await
            .map_err(|e| anyhow!("Failed to register {}: {}", dto.teacher, e.message()))?;
    }

    println!(
        "   ✓ Created {} class memberships in {:?}",
        memberships,
        start_time.elapsed()
    );

    Ok(memberships)
}
