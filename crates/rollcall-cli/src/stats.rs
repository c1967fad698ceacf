use sqlx::PgPool;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ClassroomStats {
    pub teachers: i64,
    pub students: i64,
    pub suspended_students: i64,
    pub memberships: i64,
}

async fn count(db: &PgPool, sql: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(sql).fetch_one(db).await
}

pub async fn classroom_stats(db: &PgPool) -> Result<ClassroomStats, sqlx::Error> {
    Ok(ClassroomStats {
        teachers: count(db, "SELECT COUNT(*) FROM teachers").await?,
        students: count(db, "SELECT COUNT(*) FROM students").await?,
        suspended_students: count(db, "SELECT COUNT(*) FROM students WHERE is_suspended").await?,
        memberships: count(db, "SELECT COUNT(*) FROM class_memberships").await?,
    })
}
