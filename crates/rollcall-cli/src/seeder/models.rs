use rollcall_models::RegisterStudentsDto;

/// One teacher and the students to register under them.
#[derive(Debug, Clone)]
pub struct ClassSeed {
    pub teacher: String,
    pub students: Vec<String>,
}

impl From<ClassSeed> for RegisterStudentsDto {
    fn from(seed: ClassSeed) -> Self {
        RegisterStudentsDto {
            teacher: seed.teacher,
            students: seed.students,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub teachers: usize,
    pub students: usize,
    pub students_per_teacher: usize,
}

impl SeedConfig {
    pub fn new(teachers: usize, students: usize) -> Self {
        Self {
            teachers,
            students,
            students_per_teacher: 10,
        }
    }

    pub fn with_students_per_teacher(mut self, students_per_teacher: usize) -> Self {
        self.students_per_teacher = students_per_teacher;
        self
    }

    /// Class size, capped by the size of the student pool.
    pub fn class_size(&self) -> usize {
        self.students_per_teacher.min(self.students)
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::new(5, 50)
    }
}
