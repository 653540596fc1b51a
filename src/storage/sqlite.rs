//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params};
use crate::Result;
use crate::model::{Department, EmployeeView, NewEmployee, NewRole, RoleChange, RoleView};
use crate::prompt::{Choice, ChoiceList};
use super::schema;

const SELECT_DEPARTMENTS: &str = "SELECT id, name FROM departments ORDER BY id";

const SELECT_ROLES: &str = r#"
SELECT roles.id, roles.title, roles.salary, departments.name AS department
FROM roles
LEFT JOIN departments ON roles.department_id = departments.id
ORDER BY roles.id
"#;

const SELECT_EMPLOYEES: &str = r#"
SELECT employees.id, employees.first_name, employees.last_name, roles.title AS role,
       departments.name AS department, roles.salary, managers.first_name AS manager
FROM employees
LEFT JOIN roles ON employees.role_id = roles.id
LEFT JOIN departments ON roles.department_id = departments.id
LEFT JOIN employees AS managers ON employees.manager_id = managers.id
ORDER BY employees.id
"#;

/// SQLite-backed store for departments, roles and employees
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute_batch(schema::PRAGMAS)?;
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Views ==========

    /// All departments
    pub fn list_departments(&self) -> Result<Vec<Department>> {
        tracing::debug!("select departments");
        let mut stmt = self.conn.prepare(SELECT_DEPARTMENTS)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// All roles with their department name
    pub fn list_roles(&self) -> Result<Vec<RoleView>> {
        tracing::debug!("select roles");
        let mut stmt = self.conn.prepare(SELECT_ROLES)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RoleView {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    salary: row.get(2)?,
                    department: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// All employees with role, department, salary and manager first name
    pub fn list_employees(&self) -> Result<Vec<EmployeeView>> {
        tracing::debug!("select employees");
        let mut stmt = self.conn.prepare(SELECT_EMPLOYEES)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(EmployeeView {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    role: row.get(3)?,
                    department: row.get(4)?,
                    salary: row.get(5)?,
                    manager: row.get(6)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    // ========== Choice Lookups ==========

    /// Departments as (name, id) choices
    pub fn department_choices(&self) -> Result<ChoiceList> {
        self.choices("SELECT id, name FROM departments ORDER BY id")
    }

    /// Roles as (title, id) choices
    pub fn role_choices(&self) -> Result<ChoiceList> {
        self.choices("SELECT id, title FROM roles ORDER BY id")
    }

    /// Employees as ("first last", id) choices
    pub fn employee_choices(&self) -> Result<ChoiceList> {
        self.choices("SELECT id, first_name || ' ' || last_name FROM employees ORDER BY id")
    }

    fn choices(&self, sql: &str) -> Result<ChoiceList> {
        tracing::debug!(sql, "lookup");
        let mut stmt = self.conn.prepare(sql)?;
        let choices = stmt
            .query_map([], |row| {
                let id: i64 = row.get(0)?;
                let label: String = row.get(1)?;
                Ok(Choice::new(label, id))
            })?
            .collect::<rusqlite::Result<ChoiceList>>()?;
        Ok(choices)
    }

    // ========== Mutations ==========

    /// Insert a department, returning its new id
    pub fn insert_department(&self, name: &str) -> Result<i64> {
        tracing::debug!(name, "insert department");
        self.conn.execute("INSERT INTO departments (name) VALUES (?1)", [name])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a role, returning its new id
    pub fn insert_role(&self, role: &NewRole) -> Result<i64> {
        tracing::debug!(title = %role.title, salary = %role.salary, "insert role");
        self.conn.execute(
            "INSERT INTO roles (title, salary, department_id) VALUES (?1, ?2, ?3)",
            params![role.title, role.salary, role.department_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert an employee, returning its new id
    pub fn insert_employee(&self, employee: &NewEmployee) -> Result<i64> {
        tracing::debug!(name = %employee.full_name(), "insert employee");
        self.conn.execute(
            r#"
            INSERT INTO employees (first_name, last_name, role_id, manager_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                employee.first_name,
                employee.last_name,
                employee.role_id,
                employee.manager_id,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Point an employee at a new role. Returns the number of rows changed.
    pub fn update_employee_role(&self, change: &RoleChange) -> Result<usize> {
        tracing::debug!(employee = change.employee_id, role = change.role_id, "update employee role");
        let changed = self.conn.execute(
            "UPDATE employees SET role_id = ?1 WHERE id = ?2",
            params![change.role_id, change.employee_id],
        )?;
        Ok(changed)
    }

    // ========== Statistics ==========

    fn count(&self, table: &str) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            departments: self.count("departments")?,
            roles: self.count("roles")?,
            employees: self.count("employees")?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbStats {
    pub departments: usize,
    pub roles: usize,
    pub employees: usize,
}

impl DbStats {
    /// Label/value pairs in display order
    pub fn rows(&self) -> [(&'static str, String); 3] {
        [
            ("Departments", self.departments.to_string()),
            ("Roles", self.roles.to_string()),
            ("Employees", self.employees.to_string()),
        ]
    }
}
