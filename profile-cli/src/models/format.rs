#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    #[clap(name = "raw")]
    Raw,
    #[clap(name = "json")]
    Json,
}
