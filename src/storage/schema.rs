//! Database schema definitions

/// Connection settings applied before anything else
pub const PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

/// SQL to create the departments table
pub const CREATE_DEPARTMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)
"#;

/// SQL to create the roles table
/// Salary arrives as operator text; NUMERIC affinity converts well-formed
/// numbers and the CHECK rejects anything left as text.
pub const CREATE_ROLES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS roles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    salary NUMERIC NOT NULL CHECK (typeof(salary) IN ('integer', 'real')),
    department_id INTEGER REFERENCES departments(id) ON DELETE SET NULL
)
"#;

/// SQL to create the employees table
pub const CREATE_EMPLOYEES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    role_id INTEGER REFERENCES roles(id) ON DELETE SET NULL,
    manager_id INTEGER REFERENCES employees(id) ON DELETE SET NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_roles_department ON roles(department_id)",
    "CREATE INDEX IF NOT EXISTS idx_employees_role ON employees(role_id)",
    "CREATE INDEX IF NOT EXISTS idx_employees_manager ON employees(manager_id)",
];

/// All schema creation statements, parents before children
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_DEPARTMENTS_TABLE,
        CREATE_ROLES_TABLE,
        CREATE_EMPLOYEES_TABLE,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
