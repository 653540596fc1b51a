//! Records read from and written to the store
//!
//! View records derive `Tabled` so the renderer can lay them out directly;
//! `New*` records are built from prompt answers and handed to the store.

use crate::Result;
use crate::prompt::Answers;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use std::fmt::Display;
use tabled::Tabled;

/// A salary as the store holds it.
///
/// NUMERIC affinity keeps whole numbers as 64-bit integers, so they are never
/// routed through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Salary {
    Integer(i64),
    Real(f64),
}

impl FromSql for Salary {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => Ok(Salary::Integer(i)),
            ValueRef::Real(f) => Ok(Salary::Real(f)),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

impl Display for Salary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Salary::Integer(i) => write!(f, "{}", i),
            Salary::Real(r) => write!(f, "{}", r),
        }
    }
}

/// A department row
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct Department {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Department Name")]
    pub name: String,
}

/// A role joined to its department
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct RoleView {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Salary")]
    pub salary: Salary,
    /// `None` when the role has no department or it was removed
    #[tabled(rename = "Department", display_with = "display_optional")]
    pub department: Option<String>,
}

/// An employee joined to role, department and manager
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct EmployeeView {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "First Name")]
    pub first_name: String,
    #[tabled(rename = "Last Name")]
    pub last_name: String,
    #[tabled(rename = "Role", display_with = "display_optional")]
    pub role: Option<String>,
    #[tabled(rename = "Department", display_with = "display_optional")]
    pub department: Option<String>,
    #[tabled(rename = "Salary", display_with = "display_optional")]
    pub salary: Option<Salary>,
    /// Manager's first name
    #[tabled(rename = "Manager", display_with = "display_optional")]
    pub manager: Option<String>,
}

/// Null cells render empty
fn display_optional<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// A role to insert.
///
/// Salary stays the operator's raw text; the store decides whether it is numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub title: String,
    pub salary: String,
    pub department_id: Option<i64>,
}

impl NewRole {
    pub const TITLE: &'static str = "title";
    pub const SALARY: &'static str = "salary";
    pub const DEPARTMENT: &'static str = "department_id";

    pub fn from_answers(answers: &Answers) -> Result<Self> {
        Ok(Self {
            title: answers.text(Self::TITLE)?.to_string(),
            salary: answers.text(Self::SALARY)?.to_string(),
            department_id: answers.choice(Self::DEPARTMENT)?,
        })
    }
}

/// An employee to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: Option<i64>,
    pub manager_id: Option<i64>,
}

impl NewEmployee {
    pub const FIRST_NAME: &'static str = "first_name";
    pub const LAST_NAME: &'static str = "last_name";
    pub const ROLE: &'static str = "role_id";
    pub const MANAGER: &'static str = "manager_id";

    pub fn from_answers(answers: &Answers) -> Result<Self> {
        Ok(Self {
            first_name: answers.text(Self::FIRST_NAME)?.to_string(),
            last_name: answers.text(Self::LAST_NAME)?.to_string(),
            role_id: answers.choice(Self::ROLE)?,
            manager_id: answers.choice(Self::MANAGER)?,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Target and new role for a role reassignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleChange {
    pub employee_id: i64,
    pub role_id: i64,
}

impl RoleChange {
    pub const EMPLOYEE: &'static str = "employee_id";
    pub const ROLE: &'static str = "new_role_id";

    pub fn from_answers(answers: &Answers) -> Result<Self> {
        let employee_id = answers
            .choice(Self::EMPLOYEE)?
            .ok_or_else(|| crate::Error::MissingAnswer(Self::EMPLOYEE.to_string()))?;
        let role_id = answers
            .choice(Self::ROLE)?
            .ok_or_else(|| crate::Error::MissingAnswer(Self::ROLE.to_string()))?;
        Ok(Self {
            employee_id,
            role_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Answer;

    #[test]
    fn test_new_employee_from_answers() {
        let mut answers = Answers::new();
        answers.insert(NewEmployee::FIRST_NAME, Answer::Text("Ada".into()));
        answers.insert(NewEmployee::LAST_NAME, Answer::Text("Lovelace".into()));
        answers.insert(NewEmployee::ROLE, Answer::Choice(Some(3)));
        answers.insert(NewEmployee::MANAGER, Answer::Choice(None));

        let employee = NewEmployee::from_answers(&answers).unwrap();
        assert_eq!(employee.full_name(), "Ada Lovelace");
        assert_eq!(employee.role_id, Some(3));
        assert_eq!(employee.manager_id, None);
    }

    #[test]
    fn test_new_role_keeps_raw_salary() {
        let mut answers = Answers::new();
        answers.insert(NewRole::TITLE, Answer::Text("Engineer".into()));
        answers.insert(NewRole::SALARY, Answer::Text(" 90000 ".into()));
        answers.insert(NewRole::DEPARTMENT, Answer::Choice(Some(1)));

        let role = NewRole::from_answers(&answers).unwrap();
        assert_eq!(role.salary, " 90000 ");
    }

    #[test]
    fn test_role_change_requires_both_ids() {
        let mut answers = Answers::new();
        answers.insert(RoleChange::EMPLOYEE, Answer::Choice(Some(2)));
        assert!(RoleChange::from_answers(&answers).is_err());

        answers.insert(RoleChange::ROLE, Answer::Choice(Some(5)));
        let change = RoleChange::from_answers(&answers).unwrap();
        assert_eq!(change, RoleChange { employee_id: 2, role_id: 5 });
    }

    #[test]
    fn test_salary_display_keeps_stored_type() {
        assert_eq!(Salary::Integer(9_007_199_254_740_993).to_string(), "9007199254740993");
        assert_eq!(Salary::Real(40000.5).to_string(), "40000.5");
    }

    #[test]
    fn test_optional_cells_render_empty() {
        assert_eq!(display_optional::<String>(&None), "");
        assert_eq!(display_optional(&Some(Salary::Integer(90000))), "90000");
        assert_eq!(display_optional(&Some("Ada")), "Ada");
    }
}
