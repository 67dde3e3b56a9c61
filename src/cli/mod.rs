use clap::Subcommand;

use crate::Gender;

#[derive(Subcommand)]
pub enum Commands {
    /// View or edit the stored health profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Recommend preventive screenings for the stored profile
    Plan,

    /// Assess how urgently a set of symptoms needs attention
    Triage {
        /// Free-text description of what you are experiencing
        symptoms: String,
    },

    /// Look up plain-language resources on a health topic
    Resources {
        query: Option<String>,

        /// List suggested topics instead of searching
        #[arg(long, conflicts_with = "query")]
        topics: bool,
    },

    /// Serve the JSON HTTP API
    Serve {
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    Show,

    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        /// Male, Female or Other
        #[arg(long)]
        gender: Option<Gender>,
    },

    AddCondition {
        condition: String,
    },

    /// Remove a condition by the number shown in `profile show`
    RemoveCondition {
        number: usize,
    },
}
