//! Action Handlers - one per menu entry
//!
//! Every handler is linear: optional lookups, one prompt batch, one read or
//! mutation, then an [`Outcome`] for the menu loop to print.

use crate::Result;
use crate::model::{NewEmployee, NewRole, RoleChange};
use crate::prompt::{Choice, Prompter, Question};
use crate::storage::SqliteStore;
use crate::ui;

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddDepartment,
    AddRole,
    AddEmployee,
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    UpdateEmployeeRole,
}

impl Action {
    /// The menu label
    pub fn label(&self) -> &'static str {
        match self {
            Action::AddDepartment => "Add a department",
            Action::AddRole => "Add a role",
            Action::AddEmployee => "Add an employee",
            Action::ViewDepartments => "View all departments",
            Action::ViewRoles => "View all roles",
            Action::ViewEmployees => "View all employees",
            Action::UpdateEmployeeRole => "Update an employee role",
        }
    }

    /// Get all actions
    pub fn all() -> &'static [Action] {
        &[
            Action::AddDepartment,
            Action::AddRole,
            Action::AddEmployee,
            Action::ViewDepartments,
            Action::ViewRoles,
            Action::ViewEmployees,
            Action::UpdateEmployeeRole,
        ]
    }

    /// Exact label match
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|a| a.label() == label)
    }

    pub fn run(&self, store: &SqliteStore, prompter: &mut dyn Prompter) -> Result<Outcome> {
        match self {
            Action::AddDepartment => add_department(store, prompter),
            Action::AddRole => add_role(store, prompter),
            Action::AddEmployee => add_employee(store, prompter),
            Action::ViewDepartments => view_departments(store),
            Action::ViewRoles => view_roles(store),
            Action::ViewEmployees => view_employees(store),
            Action::UpdateEmployeeRole => update_employee_role(store, prompter),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What a handler hands back to the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A rendered table
    Table(String),
    /// A one-line confirmation
    Message(String),
}

pub fn view_departments(store: &SqliteStore) -> Result<Outcome> {
    Ok(Outcome::Table(ui::render(&store.list_departments()?)))
}

pub fn view_roles(store: &SqliteStore) -> Result<Outcome> {
    Ok(Outcome::Table(ui::render(&store.list_roles()?)))
}

pub fn view_employees(store: &SqliteStore) -> Result<Outcome> {
    Ok(Outcome::Table(ui::render(&store.list_employees()?)))
}

pub fn add_department(store: &SqliteStore, prompter: &mut dyn Prompter) -> Result<Outcome> {
    let answers = prompter.ask(&[Question::input("name", "Enter the department name:")])?;
    let name = answers.text("name")?;

    let id = store.insert_department(name)?;
    tracing::info!(id, name, "department added");
    Ok(Outcome::Message(format!("Department '{}' added.", name)))
}

pub fn add_role(store: &SqliteStore, prompter: &mut dyn Prompter) -> Result<Outcome> {
    let departments = store.department_choices()?;
    let answers = prompter.ask(&[
        Question::input(NewRole::TITLE, "Enter the role title:"),
        Question::input(NewRole::SALARY, "Enter the salary:"),
        Question::select(NewRole::DEPARTMENT, "Select the department:", departments),
    ])?;
    let role = NewRole::from_answers(&answers)?;

    let id = store.insert_role(&role)?;
    tracing::info!(id, title = %role.title, "role added");
    Ok(Outcome::Message(format!("Role '{}' added.", role.title)))
}

/// The label of the synthetic "no manager" entry
pub const NO_MANAGER: &str = "None";

pub fn add_employee(store: &SqliteStore, prompter: &mut dyn Prompter) -> Result<Outcome> {
    let roles = store.role_choices()?;
    let mut managers = store.employee_choices()?;
    managers.push(Choice::none(NO_MANAGER));
    let no_manager = managers.len() - 1;

    let answers = prompter.ask(&[
        Question::input(NewEmployee::FIRST_NAME, "Enter the employee’s first name:"),
        Question::input(NewEmployee::LAST_NAME, "Enter the employee’s last name:"),
        Question::select(NewEmployee::ROLE, "Select the role:", roles),
        Question::select(NewEmployee::MANAGER, "Select the manager:", managers)
            .with_default(no_manager),
    ])?;
    let employee = NewEmployee::from_answers(&answers)?;

    let id = store.insert_employee(&employee)?;
    tracing::info!(id, name = %employee.full_name(), "employee added");
    Ok(Outcome::Message(format!("Employee '{}' added.", employee.full_name())))
}

pub fn update_employee_role(store: &SqliteStore, prompter: &mut dyn Prompter) -> Result<Outcome> {
    let employees = store.employee_choices()?;
    let roles = store.role_choices()?;

    let answers = prompter.ask(&[
        Question::select(RoleChange::EMPLOYEE, "Select the employee to update:", employees),
        Question::select(RoleChange::ROLE, "Select the new role:", roles),
    ])?;
    let change = RoleChange::from_answers(&answers)?;

    store.update_employee_role(&change)?;
    tracing::info!(employee = change.employee_id, role = change.role_id, "employee role updated");
    Ok(Outcome::Message("Employee role updated.".to_string()))
}
