//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::AppConfig;
use crate::domain::sermon::{Audience, PromptOptions, SermonForm, SermonStructure};

/// SermonGen - sermon outline generator
#[derive(Parser, Debug)]
#[command(name = "sermon-gen")]
#[command(version)]
#[command(about = "Generate sermon outlines with a Mistral chat-completion model")]
#[command(long_about = None)]
pub struct Cli {
    /// Sermon topic (3-100 characters)
    #[arg(short = 't', long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Bible verse reference (e.g., "Yohanes 3:16")
    #[arg(short = 'b', long = "verse", value_name = "VERSE")]
    pub bible_verse: Option<String>,

    /// Rhetorical structure of the sermon
    #[arg(short = 's', long, value_name = "STRUCTURE")]
    pub structure: Option<StructureArg>,

    /// Target audience
    #[arg(short = 'a', long, value_name = "AUDIENCE")]
    pub audience: Option<AudienceArg>,

    /// Leave out the sermon purpose section
    #[arg(long)]
    pub no_purpose: bool,

    /// Leave out the Bible research section
    #[arg(long)]
    pub no_bible_research: bool,

    /// Leave out the practical application section
    #[arg(long)]
    pub no_applications: bool,

    /// Leave out the call-to-action section
    #[arg(long)]
    pub no_call_to_action: bool,

    /// Extra instructions appended to the prompt
    #[arg(short = 'i', long, value_name = "TEXT")]
    pub instructions: Option<String>,

    /// Read the request from a JSON file (flags override its fields)
    #[arg(short = 'r', long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Model identifier to use for this run
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Print the assembled prompt without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not save the result to history
    #[arg(long)]
    pub no_save: bool,

    /// Copy the generated outline to the clipboard
    #[arg(long)]
    pub clipboard: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Form fields given on the command line. Unset flags stay `None` so
    /// that absent section flags keep their default-include meaning.
    pub fn to_form(&self) -> SermonForm {
        let options = PromptOptions {
            include_purpose: self.no_purpose.then_some(false),
            include_bible_research: self.no_bible_research.then_some(false),
            include_applications: self.no_applications.then_some(false),
            include_call_to_action: self.no_call_to_action.then_some(false),
            custom_instructions: self.instructions.clone(),
        };

        SermonForm {
            topic: self.topic.clone(),
            bible_verse: self.bible_verse.clone(),
            structure: self.structure.map(|s| SermonStructure::from(s).to_string()),
            audience: self.audience.map(|a| Audience::from(a).to_string()),
            custom_prompt_options: (options != PromptOptions::default()).then_some(options),
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Browse saved outlines
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// History action subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List saved outlines, newest first
    List,
    /// Print a saved outline
    Show {
        /// Item id or unique id prefix
        id: String,
    },
    /// Delete a saved outline
    Remove {
        /// Item id or unique id prefix
        id: String,
    },
    /// Delete all saved outlines
    Clear,
}

/// Structure argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StructureArg {
    Topical,
    Exegesis,
    Textual,
    Expository,
    Narrative,
}

impl From<StructureArg> for SermonStructure {
    fn from(arg: StructureArg) -> Self {
        match arg {
            StructureArg::Topical => SermonStructure::Topical,
            StructureArg::Exegesis => SermonStructure::Exegesis,
            StructureArg::Textual => SermonStructure::Textual,
            StructureArg::Expository => SermonStructure::Expository,
            StructureArg::Narrative => SermonStructure::Narrative,
        }
    }
}

/// Audience argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AudienceArg {
    General,
    Youth,
}

impl From<AudienceArg> for Audience {
    fn from(arg: AudienceArg) -> Self {
        match arg {
            AudienceArg::General => Audience::General,
            AudienceArg::Youth => Audience::Youth,
        }
    }
}

/// Parsed generate options
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub form: SermonForm,
    pub dry_run: bool,
    pub json: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = AppConfig::KEYS;

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
