use core::slice;

use super::Student;

/// Students in the order the database returned them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Roster(pub Vec<Student>);

impl Roster {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Roster(iter.into_iter().collect())
    }
}

impl IntoIterator for Roster {
    type Item = Student;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;

    type IntoIter = slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
