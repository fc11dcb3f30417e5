use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(help = "Project title.")]
    pub title: String,

    #[arg(short = 'd', long = "desc", help = "Project description.")]
    pub desc: String,

    #[arg(long, help = "Date as YYYY-MM-DD (defaults to today).")]
    pub date: Option<String>,

    #[arg(
        short = 't',
        long,
        default_value = "",
        help = "Comma-separated tags, e.g. \"web, ui\"."
    )]
    pub tags: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(help = "Project id.")]
    pub id: String,

    #[arg(long, help = "Set title.")]
    pub title: Option<String>,

    #[arg(short = 'd', long = "desc", help = "Set description.")]
    pub desc: Option<String>,

    #[arg(long, help = "Set date (YYYY-MM-DD, empty to clear).")]
    pub date: Option<String>,

    #[arg(short = 't', long, help = "Replace tags (comma-separated).")]
    pub tags: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(help = "Project id.")]
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short = 'q', long, help = "Case-insensitive text in title, description or tags.")]
    pub query: Option<String>,

    #[arg(short = 't', long, help = "Only projects with this tag (\"all\" for any).")]
    pub tag: Option<String>,

    #[arg(
        short = 's',
        long,
        help = "Sort order: new, old, az, za (defaults to config default_sort)."
    )]
    pub sort: Option<String>,

    #[arg(short = 'j', long, help = "Render machine-readable JSON.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(help = "Project id.")]
    pub id: String,

    #[arg(short = 'j', long, help = "Render machine-readable JSON.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct TagsArgs {
    #[arg(short = 'j', long, help = "Render machine-readable JSON.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(help = "Shell name (bash, zsh, fish, elvish, powershell). Auto-detected if omitted.")]
    pub shell: Option<String>,
}
