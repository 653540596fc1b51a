//! Menu Loop

use crate::Result;
use crate::actions::{Action, Outcome};
use crate::prompt::Prompter;
use crate::storage::SqliteStore;
use crate::ui;

pub const MENU_PROMPT: &str = "What would you like to do?";

/// The interactive session: one store, one prompter, no other state.
pub struct App<P: Prompter> {
    store: SqliteStore,
    prompter: P,
}

impl<P: Prompter> App<P> {
    pub fn new(store: SqliteStore, prompter: P) -> Self {
        Self { store, prompter }
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Show the menu forever. Only returns when an action or prompt fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.step()?;
        }
    }

    /// Show the menu once and run the chosen action
    pub fn step(&mut self) -> Result<()> {
        let labels: Vec<String> = Action::all().iter().map(|a| a.label().to_string()).collect();
        let index = self.prompter.select(MENU_PROMPT, &labels, Some(0))?;
        let label = labels.get(index).map(String::as_str).unwrap_or_default();
        self.dispatch(label)
    }

    /// Run the action whose label matches exactly and print its outcome
    pub fn dispatch(&mut self, label: &str) -> Result<()> {
        let Some(action) = Action::from_label(label) else {
            tracing::warn!(label, "unknown menu selection");
            ui::error("Invalid action.");
            return Ok(());
        };

        tracing::debug!(%action, "dispatching");
        match action.run(&self.store, &mut self.prompter)? {
            Outcome::Table(table) => println!("{}", table),
            Outcome::Message(message) => ui::success(&message),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::actions::NO_MANAGER;
    use crate::model::Salary;
    use crate::prompt::{ScriptedAnswer, ScriptedPrompter};

    fn pick(label: &str) -> ScriptedAnswer {
        ScriptedAnswer::pick(label)
    }

    fn text(value: &str) -> ScriptedAnswer {
        ScriptedAnswer::text(value)
    }

    fn app(script: Vec<ScriptedAnswer>) -> App<ScriptedPrompter> {
        App::new(SqliteStore::open_in_memory().unwrap(), ScriptedPrompter::new(script))
    }

    #[test]
    fn test_loop_runs_until_script_exhausted() {
        let mut app = app(vec![
            pick("Add a department"),
            text("Engineering"),
            pick("View all departments"),
        ]);

        let err = app.run().unwrap_err();
        assert!(matches!(err, Error::Prompt(_)));

        let menus = app
            .prompter()
            .asked()
            .iter()
            .filter(|q| q.label == MENU_PROMPT)
            .count();
        assert_eq!(menus, 3);
        assert_eq!(app.store().list_departments().unwrap().len(), 1);
    }

    #[test]
    fn test_menu_order() {
        let mut app = app(vec![pick("View all roles")]);
        app.step().unwrap();

        let menu = app.prompter().asked()[0].items.clone().unwrap();
        assert_eq!(
            menu,
            vec![
                "Add a department",
                "Add a role",
                "Add an employee",
                "View all departments",
                "View all roles",
                "View all employees",
                "Update an employee role",
            ]
        );
    }

    #[test]
    fn test_unknown_label_continues() {
        let mut app = app(vec![]);
        app.dispatch("Delete everything").unwrap();
        assert!(app.prompter().asked().is_empty());
    }

    #[test]
    fn test_failed_action_ends_the_loop() {
        let mut app = app(vec![pick("Add a role"), pick("View all roles")]);

        let err = app.run().unwrap_err();
        assert!(matches!(err, Error::EmptyChoices(_)));
        assert_eq!(app.prompter().remaining(), 1);
    }

    #[test]
    fn test_end_to_end_first_hire() {
        let mut app = app(vec![
            pick("Add a department"),
            text("Engineering"),
            pick("Add a role"),
            text("Engineer"),
            text("90000"),
            pick("Engineering"),
            pick("Add an employee"),
            text("Ada"),
            text("Lovelace"),
            pick("Engineer"),
            pick(NO_MANAGER),
            pick("View all employees"),
        ]);
        assert!(matches!(app.run().unwrap_err(), Error::Prompt(_)));

        let employees = app.store().list_employees().unwrap();
        assert_eq!(employees.len(), 1);
        let ada = &employees[0];
        assert_eq!(ada.first_name, "Ada");
        assert_eq!(ada.last_name, "Lovelace");
        assert_eq!(ada.role.as_deref(), Some("Engineer"));
        assert_eq!(ada.department.as_deref(), Some("Engineering"));
        assert_eq!(ada.salary, Some(Salary::Integer(90000)));
        assert_eq!(ada.manager, None);

        let table = ui::render(&employees);
        assert!(table.contains("90000"));
    }

    #[test]
    fn test_end_to_end_role_reassignment() {
        let mut app = app(vec![
            pick("Add a department"),
            text("Engineering"),
            pick("Add a role"),
            text("Engineer"),
            text("90000"),
            pick("Engineering"),
            pick("Add a role"),
            text("Architect"),
            text("120000"),
            pick("Engineering"),
            pick("Add an employee"),
            text("Ada"),
            text("Lovelace"),
            pick("Engineer"),
            pick(NO_MANAGER),
            pick("Add an employee"),
            text("Charles"),
            text("Babbage"),
            pick("Engineer"),
            pick("Ada Lovelace"),
        ]);
        assert!(matches!(app.run().unwrap_err(), Error::Prompt(_)));
        let before = app.store().list_employees().unwrap();

        let mut app = App::new(
            app.store,
            ScriptedPrompter::new(vec![
                pick("Update an employee role"),
                pick("Charles Babbage"),
                pick("Architect"),
            ]),
        );
        assert!(matches!(app.run().unwrap_err(), Error::Prompt(_)));

        let after = app.store().list_employees().unwrap();
        assert_eq!(after.len(), 2);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1].role.as_deref(), Some("Architect"));
        assert_eq!(after[1].manager.as_deref(), Some("Ada"));
        assert_eq!(after[1].last_name, "Babbage");
    }
}
