use clap::Args;
use clap_complete::{generate, Shell};
use std::io;

#[derive(Args)]
pub struct CompletionsCommand {
    /// The shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

impl CompletionsCommand {
    /// Generate completions for the given command
    // RUST LEARNING: `C: clap::CommandFactory` lets main pass its own `Cli` type in
    pub fn generate_completions<C: clap::CommandFactory>(&self) {
        let mut cmd = C::command();
        let name = cmd.get_name().to_string();
        generate(self.shell, &mut cmd, name, &mut io::stdout());
    }
}
