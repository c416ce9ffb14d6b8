use std::fmt;

/// A student, used as a `HashMap` key.
///
/// Two students are equal when both `id` and `name` match, and `Hash` is
/// derived from the same two fields. There are no setters: changing a field
/// of a key already inside a hash table would strand it in the wrong bucket,
/// so `with_id` and `with_name` hand back a new value instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    id: i32,
    name: String,
}

impl Student {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Student {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn with_id(&self, id: i32) -> Self {
        Student {
            id,
            name: self.name.clone(),
        }
    }

    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Student {
            id: self.id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student{{id={}, name={}}}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(student: &Student) -> u64 {
        let mut hasher = DefaultHasher::new();
        student.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_students_hash_equal() {
        let a = Student::new(1001, "Tom");
        let b = Student::new(1001, "Tom");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_different_id_not_equal() {
        assert_ne!(Student::new(1001, "Tom"), Student::new(1002, "Tom"));
    }

    #[test]
    fn test_different_name_not_equal() {
        assert_ne!(Student::new(1001, "Tom"), Student::new(1001, "Tim"));
    }

    #[test]
    fn test_with_name_leaves_original_untouched() {
        let tom = Student::new(1001, "Tom Malone");
        let renamed = tom.with_name("Thomas Malone");

        assert_eq!(tom.name(), "Tom Malone");
        assert_eq!(renamed.name(), "Thomas Malone");
        assert_eq!(renamed.id(), 1001);
        assert_ne!(tom, renamed);
    }

    #[test]
    fn test_with_id() {
        let zoe = Student::new(2002, "Zoe Salanda");
        assert_eq!(zoe.with_id(2003).id(), 2003);
        assert_eq!(zoe.id(), 2002);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Student::new(1001, "Tom Malone").to_string(),
            "Student{id=1001, name=Tom Malone}"
        );
    }
}
