pub mod health;
pub mod users;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use crate::cli::globals::GlobalArgs;

#[derive(Debug)]
pub enum Action {
    List,
    Get { id: String },
    Add { name: String, email: String },
    Update { id: String, name: String, email: String },
    Delete { id: String },
    Health,
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute(&globals).await`.
    /// Execute the action, writing its report to stdout.
    /// # Errors
    /// Returns an error if the client cannot be built or the API reports a failure.
    pub async fn execute(self, globals: &GlobalArgs) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout();
        run::execute(self, globals, &mut stdout).await
    }
}
