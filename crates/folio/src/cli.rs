//! Clap derive structures for the `folio` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// folio -- browse a portfolio and blog backend from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version,
    about = "Browse a portfolio and blog API from the command line",
    long_about = "A terminal client for a personal portfolio backend.\n\n\
        Reads the hero, about, skills, resume and certification sections,\n\
        filters and searches projects, and pages through the blog.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "FOLIO_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API origin (overrides profile), e.g. http://localhost:5000/api
    #[arg(long, short = 'u', env = "FOLIO_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "FOLIO_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "FOLIO_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Retries for failed reads (0 disables)
    #[arg(long, env = "FOLIO_RETRIES", global = true)]
    pub retries: Option<u32>,

    /// How a search combines with the other project filters
    #[arg(long, env = "FOLIO_SEARCH_POLICY", global = true)]
    pub search_policy: Option<SearchPolicyArg>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchPolicyArg {
    /// Search narrows the other filters
    Compose,
    /// A non-empty search ignores the other filters
    Override,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the landing section
    Hero,

    /// Show biography, education and experience
    About,

    /// List technical and soft skills
    Skills,

    /// Show the resume
    #[command(alias = "cv")]
    Resume,

    /// List certifications
    #[command(alias = "certs")]
    Certifications,

    /// List certificates (legacy endpoint)
    Certificates,

    /// Browse, filter and search projects
    #[command(alias = "proj", alias = "p")]
    Projects(ProjectsArgs),

    /// Browse the blog
    #[command(alias = "b")]
    Blog(BlogArgs),

    /// Image URL utilities
    Media(MediaArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Projects ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub command: ProjectsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProjectsCommand {
    /// List projects, optionally filtered
    #[command(alias = "ls")]
    List(ProjectFilterArgs),

    /// Show one project
    #[command(alias = "get")]
    Show {
        /// Project ID
        id: u64,
    },

    /// List featured projects
    Featured,

    /// List the projects of one category
    Category {
        /// Category name, e.g. "Cloud Computing"
        name: String,
    },

    /// List solo or team projects
    #[command(name = "type")]
    ByType {
        team_type: TeamTypeArg,
    },

    /// Show the filter values present in the collection
    Options,
}

#[derive(Debug, Args)]
pub struct ProjectFilterArgs {
    /// Only solo or only team projects
    #[arg(long = "type", short = 't')]
    pub team_type: Option<TeamTypeArg>,

    /// Technology filter (repeatable or comma-separated; any may match)
    #[arg(long, value_delimiter = ',')]
    pub tech: Vec<String>,

    /// Lifecycle status
    #[arg(long)]
    pub status: Option<StatusArg>,

    /// Difficulty rating
    #[arg(long)]
    pub difficulty: Option<DifficultyArg>,

    /// Case-insensitive search over title, description and technologies
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TeamTypeArg {
    Solo,
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Completed,
    InProgress,
    Planned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Beginner,
    Intermediate,
    Advanced,
}

// ── Blog ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BlogArgs {
    #[command(subcommand)]
    pub command: BlogCommand,
}

#[derive(Debug, Subcommand)]
pub enum BlogCommand {
    /// List one page of posts, newest first
    #[command(alias = "ls")]
    List(BlogListArgs),

    /// Show one post by slug
    #[command(alias = "get")]
    Show {
        slug: String,
    },

    /// List blog categories
    Categories,

    /// List blog tags
    Tags,

    /// Add or remove a reaction on a post
    Engage {
        /// Post ID
        post_id: String,

        /// Reaction to send
        #[arg(value_enum)]
        reaction: ReactionArg,

        /// Remove the reaction instead of adding it
        #[arg(long)]
        remove: bool,
    },
}

#[derive(Debug, Args)]
pub struct BlogListArgs {
    /// Listing state as a query string, e.g. "category=Cloud&page=2"
    #[arg(long)]
    pub query: Option<String>,

    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<usize>,

    /// Only posts in this category (clears --tag from --query)
    #[arg(long, conflicts_with = "tag")]
    pub category: Option<String>,

    /// Only posts carrying this tag (clears --category from --query)
    #[arg(long)]
    pub tag: Option<String>,

    /// Search title, excerpt and content
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReactionArg {
    Like,
    Clap,
    Heart,
}

// ── Media ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct MediaArgs {
    #[command(subcommand)]
    pub command: MediaCommand,
}

#[derive(Debug, Subcommand)]
pub enum MediaCommand {
    /// Print the direct-download form of an image URL
    Normalize {
        url: String,

        /// Produce the form used for embedded frames
        #[arg(long)]
        embed: bool,
    },

    /// Check that a string is an absolute URL
    Check {
        url: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a profile to the config file
    Init {
        /// Profile name
        #[arg(long, default_value = "default")]
        name: String,

        /// API origin for the profile
        #[arg(long = "url", default_value = "http://localhost:5000/api")]
        url: String,

        /// Replace an existing profile of the same name
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Set one value on the active profile
    Set {
        /// api_url, timeout, cache_ttl, retries, search_policy or per_page
        key: String,
        value: String,
    },

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },

    /// List configured profiles
    Profiles,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
