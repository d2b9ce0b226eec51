//! tmdbkit - command-line access to The Movie Database.

/// Application configuration (TOML).
mod config;

use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, Credential, TmdbSection, resolve_config_path};
use tmdbkit_api::{
    CompareType, DiscoverCriteria, ImageType, LocalTmdbRawApi, SortBy, Tmdb, TmdbClient,
};

/// Per-request timeout applied to every TMDB call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CLI argument parser.
#[derive(Parser)]
#[command(name = "tmdbkit", about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Movie calls.
    Movie(MovieCommand),
    /// TV series calls.
    Tv(TvCommand),
    /// Person calls.
    Person(PersonCommand),
    /// Print the TV and movie genre tables.
    Genres,
    /// Print the TV watch providers sorted by US display priority.
    Providers,
    /// Manage the config file.
    Config(ConfigCommand),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieCommand {
    /// Movie subcommand to run.
    #[command(subcommand)]
    command: MovieSubcommands,
}

/// Available movie subcommands.
#[derive(Subcommand)]
enum MovieSubcommands {
    /// Search movies by title.
    Search(SearchArgs),
    /// Movie details.
    Details(MovieDetailsArgs),
    /// English posters or backdrops.
    Images(ImagesArgs),
    /// Trailers and other videos.
    Videos(IdArgs),
    /// Cast and crew.
    Credits(IdArgs),
    /// Recommendations based on a movie.
    Recommendations(PagedIdArgs),
    /// Popular, now playing or upcoming movies.
    List(MovieListArgs),
    /// Discover movies by genre, people, providers and dates.
    Discover(DiscoverArgs),
    /// Movie credits of a person.
    PersonCredits(IdArgs),
    /// Watch providers per country.
    Providers(ProvidersArgs),
}

/// Arguments for the `tv` subcommand.
#[derive(clap::Args)]
struct TvCommand {
    /// TV subcommand to run.
    #[command(subcommand)]
    command: TvSubcommands,
}

/// Available TV subcommands.
#[derive(Subcommand)]
enum TvSubcommands {
    /// Search series by name.
    Search(SearchArgs),
    /// Series details.
    Details(IdArgs),
    /// Episodes of one season.
    Season(SeasonArgs),
    /// English posters or backdrops.
    Images(ImagesArgs),
    /// Cast and crew.
    Credits(IdArgs),
    /// Popular series.
    Popular(PopularArgs),
    /// Discover series by genre, providers and dates.
    Discover(DiscoverArgs),
    /// Watch providers per country.
    Providers(ProvidersArgs),
    /// IMDb, TVDB and social ids.
    ExternalIds(IdArgs),
}

/// Arguments for the `person` subcommand.
#[derive(clap::Args)]
struct PersonCommand {
    /// Person subcommand to run.
    #[command(subcommand)]
    command: PersonSubcommands,
}

/// Available person subcommands.
#[derive(Subcommand)]
enum PersonSubcommands {
    /// Search people by name, most popular first.
    Search(PersonSearchArgs),
    /// Person details.
    Details(IdArgs),
    /// Profile images, best rated first.
    Images(IdArgs),
    /// Combined movie and TV credits.
    Credits(IdArgs),
    /// TV credits.
    TvCredits(IdArgs),
    /// Look up a single credit by its id.
    Credit(CreditArgs),
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Write a config template.
    Init(ConfigInitArgs),
    /// Print the config with credentials masked.
    Show,
}

/// Arguments for `config init`.
#[derive(clap::Args)]
struct ConfigInitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

/// Arguments for `completions`.
#[derive(clap::Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: clap_complete::Shell,
}

/// A single TMDB id.
#[derive(clap::Args)]
struct IdArgs {
    /// TMDB id.
    #[arg(long, required = true)]
    id: u64,
}

/// A TMDB id with a page number.
#[derive(clap::Args)]
struct PagedIdArgs {
    /// TMDB id.
    #[arg(long, required = true)]
    id: u64,
    /// Page number.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for title searches.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "Alien").
    #[arg(long, required = true)]
    query: String,
    /// Page number.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for `person search`.
#[derive(clap::Args)]
struct PersonSearchArgs {
    /// Person name (e.g. "Sigourney Weaver").
    #[arg(long, required = true)]
    name: String,
    /// Page number.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for `movie details`.
#[derive(clap::Args)]
struct MovieDetailsArgs {
    /// TMDB movie id.
    #[arg(long, required = true)]
    id: u64,
    /// Append the movie's videos.
    #[arg(long)]
    videos: bool,
}

/// Arguments for image listings.
#[derive(clap::Args)]
struct ImagesArgs {
    /// TMDB id.
    #[arg(long, required = true)]
    id: u64,
    /// Image kind.
    #[arg(long, value_enum, default_value_t = ImageKind::Posters)]
    kind: ImageKind,
}

/// Image kind accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum ImageKind {
    /// Posters.
    Posters,
    /// Backdrops.
    Backdrops,
}

impl From<ImageKind> for ImageType {
    fn from(kind: ImageKind) -> Self {
        match kind {
            ImageKind::Posters => Self::Posters,
            ImageKind::Backdrops => Self::Backdrops,
        }
    }
}

/// Arguments for `tv season`.
#[derive(clap::Args)]
struct SeasonArgs {
    /// TMDB series id.
    #[arg(long, required = true)]
    id: u64,
    /// Season number.
    #[arg(long, required = true)]
    season: u32,
}

/// Arguments for `movie list`.
#[derive(clap::Args)]
struct MovieListArgs {
    /// Which list to fetch.
    #[arg(long, value_enum, default_value_t = MovieListKind::Popular)]
    kind: MovieListKind,
    /// Page number.
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Response language (default: the configured language).
    #[arg(long)]
    language: Option<String>,
}

/// Movie list accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum MovieListKind {
    /// Popular movies.
    Popular,
    /// Movies now in theatres.
    NowPlaying,
    /// Upcoming movies.
    Upcoming,
}

/// Arguments for `tv popular`.
#[derive(clap::Args)]
struct PopularArgs {
    /// Page number.
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Response language (default: the configured language).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for watch provider lookups.
#[derive(clap::Args)]
struct ProvidersArgs {
    /// TMDB id.
    #[arg(long, required = true)]
    id: u64,
    /// Comma-separated country codes (default: US).
    #[arg(long, value_delimiter = ',')]
    country: Vec<String>,
}

/// Arguments for `person credit`.
#[derive(clap::Args)]
struct CreditArgs {
    /// Credit id (e.g. "52fe4211c3a36847f8001b2f").
    #[arg(long, required = true)]
    credit_id: String,
}

/// Discover filters shared by `movie discover` and `tv discover`.
#[derive(clap::Args)]
#[allow(clippy::struct_excessive_bools)]
struct DiscoverArgs {
    /// Comma-separated genre ids.
    #[arg(long, value_delimiter = ',')]
    genres: Vec<u32>,
    /// Require every genre instead of any.
    #[arg(long)]
    all_genres: bool,
    /// Release or first-air year.
    #[arg(long)]
    year: Option<u32>,
    /// Earliest release date (YYYY-MM-DD).
    #[arg(long)]
    release_date_gte: Option<String>,
    /// Latest release date (YYYY-MM-DD).
    #[arg(long)]
    release_date_lte: Option<String>,
    /// Comma-separated cast person ids (movies only).
    #[arg(long, value_delimiter = ',')]
    cast: Vec<u64>,
    /// Require every cast member instead of any.
    #[arg(long)]
    all_cast: bool,
    /// Comma-separated crew person ids (movies only).
    #[arg(long, value_delimiter = ',')]
    crew: Vec<u64>,
    /// Require every crew member instead of any.
    #[arg(long)]
    all_crew: bool,
    /// Comma-separated watch provider ids.
    #[arg(long, value_delimiter = ',')]
    providers: Vec<u32>,
    /// Require every watch provider instead of any.
    #[arg(long)]
    all_providers: bool,
    /// Region the provider filter applies to (defaults to "US").
    #[arg(long)]
    region: Option<String>,
    /// Sort order (e.g. "popularity.desc").
    #[arg(long)]
    sort_by: Option<SortBy>,
    /// Page number.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

impl DiscoverArgs {
    /// Converts the flags into discover criteria.
    fn criteria(&self) -> DiscoverCriteria {
        let compare = |all: bool| if all { CompareType::And } else { CompareType::Or };

        let mut criteria = DiscoverCriteria::new()
            .genres(self.genres.clone(), compare(self.all_genres))
            .cast(self.cast.clone(), compare(self.all_cast))
            .crew(self.crew.clone(), compare(self.all_crew))
            .watch_providers(self.providers.clone(), compare(self.all_providers));
        if let Some(year) = self.year {
            criteria = criteria.year(year);
        }
        if let Some(date) = &self.release_date_gte {
            criteria = criteria.release_date_gte(date.as_str());
        }
        if let Some(date) = &self.release_date_lte {
            criteria = criteria.release_date_lte(date.as_str());
        }
        if let Some(region) = &self.region {
            criteria = criteria.watch_region(region.as_str());
        }
        if let Some(sort_by) = self.sort_by {
            criteria = criteria.sort_by(sort_by);
        }
        criteria
    }
}

/// Writes `value` to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write to stdout")
}

/// Borrows country codes for the curated watch provider calls.
fn country_codes(codes: &[String]) -> Vec<&str> {
    codes.iter().map(String::as_str).collect()
}

/// Builds a `TmdbClient` from the config file and environment.
///
/// # Errors
///
/// Returns an error if no credential is available, the base URL is invalid,
/// or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client(config: &AppConfig) -> Result<TmdbClient> {
    let mut builder = TmdbClient::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(REQUEST_TIMEOUT);

    builder = match config.credential()? {
        Credential::ApiKey(key) => builder.api_key(key),
        Credential::Bearer(token) => builder.bearer_token(token),
    };

    if let Some(url) = config.base_url()? {
        builder = builder.base_url(url);
    }

    builder.build().context("failed to build TMDB client")
}

/// Loads the config and initializes a curated handle.
///
/// # Errors
///
/// Returns an error if the config cannot be read or the client fails to build.
#[instrument(skip_all)]
async fn init_tmdb(dir: Option<&PathBuf>) -> Result<Tmdb> {
    let path = resolve_config_path(dir)?;
    let config = AppConfig::load(&path)?;
    let client = build_tmdb_client(&config)?;
    Ok(Tmdb::initialize(client, config.options).await)
}

/// Runs a `movie` subcommand.
///
/// # Errors
///
/// Returns an error if initialization or the TMDB request fails.
#[instrument(skip_all)]
async fn run_movie(command: MovieSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = init_tmdb(dir).await?;

    match command {
        MovieSubcommands::Search(args) => print_json(
            &tmdb
                .movie_search_by_title(&args.query, args.page)
                .await
                .context("TMDB search/movie request failed")?,
        ),
        MovieSubcommands::Details(args) => print_json(
            &tmdb
                .movie_get_details(args.id, args.videos)
                .await
                .context("TMDB movie details request failed")?,
        ),
        MovieSubcommands::Images(args) => print_json(
            &tmdb
                .movie_get_images(args.id, args.kind.into())
                .await
                .context("TMDB movie images request failed")?,
        ),
        MovieSubcommands::Videos(args) => print_json(
            &tmdb
                .movie_get_videos(args.id)
                .await
                .context("TMDB movie videos request failed")?,
        ),
        MovieSubcommands::Credits(args) => print_json(
            &tmdb
                .movie_get_credits(args.id)
                .await
                .context("TMDB movie credits request failed")?,
        ),
        MovieSubcommands::Recommendations(args) => print_json(
            &tmdb
                .movie_get_recommendations(args.id, args.page)
                .await
                .context("TMDB movie recommendations request failed")?,
        ),
        MovieSubcommands::List(args) => {
            let language = args.language.as_deref();
            let page = match args.kind {
                MovieListKind::Popular => tmdb.movie_get_popular(args.page, language).await,
                MovieListKind::NowPlaying => tmdb.movie_get_now_playing(args.page, language).await,
                MovieListKind::Upcoming => tmdb.movie_get_upcoming(args.page, language).await,
            };
            print_json(&page.context("TMDB movie list request failed")?)
        }
        MovieSubcommands::Discover(args) => print_json(
            &tmdb
                .movie_discover(&args.criteria(), args.page)
                .await
                .context("TMDB discover/movie request failed")?,
        ),
        MovieSubcommands::PersonCredits(args) => print_json(
            &tmdb
                .movie_get_person_credits(args.id)
                .await
                .context("TMDB person movie credits request failed")?,
        ),
        MovieSubcommands::Providers(args) => print_json(
            &tmdb
                .movie_get_watch_providers(args.id, &country_codes(&args.country))
                .await
                .context("TMDB movie watch providers request failed")?,
        ),
    }
}

/// Runs a `tv` subcommand.
///
/// # Errors
///
/// Returns an error if initialization or the TMDB request fails.
#[instrument(skip_all)]
async fn run_tv(command: TvSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = init_tmdb(dir).await?;

    match command {
        TvSubcommands::Search(args) => print_json(
            &tmdb
                .tv_search_by_title(&args.query, args.page)
                .await
                .context("TMDB search/tv request failed")?,
        ),
        TvSubcommands::Details(args) => print_json(
            &tmdb
                .tv_get_show_details(args.id)
                .await
                .context("TMDB tv details request failed")?,
        ),
        TvSubcommands::Season(args) => print_json(
            &tmdb
                .tv_get_episodes(args.id, args.season)
                .await
                .context("TMDB tv season request failed")?,
        ),
        TvSubcommands::Images(args) => print_json(
            &tmdb
                .tv_get_images(args.id, args.kind.into())
                .await
                .context("TMDB tv images request failed")?,
        ),
        TvSubcommands::Credits(args) => print_json(
            &tmdb
                .tv_get_show_credits(args.id)
                .await
                .context("TMDB tv credits request failed")?,
        ),
        TvSubcommands::Popular(args) => print_json(
            &tmdb
                .tv_get_popular(args.page, args.language.as_deref())
                .await
                .context("TMDB tv popular request failed")?,
        ),
        TvSubcommands::Discover(args) => {
            if !args.cast.is_empty() || !args.crew.is_empty() {
                tracing::warn!("--cast and --crew are ignored by TV discover");
            }
            print_json(
                &tmdb
                    .tv_discover(&args.criteria(), args.page)
                    .await
                    .context("TMDB discover/tv request failed")?,
            )
        }
        TvSubcommands::Providers(args) => print_json(
            &tmdb
                .tv_get_watch_providers(args.id, &country_codes(&args.country))
                .await
                .context("TMDB tv watch providers request failed")?,
        ),
        TvSubcommands::ExternalIds(args) => print_json(
            &tmdb
                .raw()
                .tv_external_ids(args.id)
                .await
                .context("TMDB tv external ids request failed")?,
        ),
    }
}

/// Runs a `person` subcommand.
///
/// # Errors
///
/// Returns an error if initialization or the TMDB request fails.
#[instrument(skip_all)]
async fn run_person(command: PersonSubcommands, dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = init_tmdb(dir).await?;

    match command {
        PersonSubcommands::Search(args) => print_json(
            &tmdb
                .search_for_person_id(&args.name, args.page)
                .await
                .context("TMDB search/person request failed")?,
        ),
        PersonSubcommands::Details(args) => print_json(
            &tmdb
                .person_details(args.id)
                .await
                .context("TMDB person details request failed")?,
        ),
        PersonSubcommands::Images(args) => print_json(
            &tmdb
                .person_images(args.id)
                .await
                .context("TMDB person images request failed")?,
        ),
        PersonSubcommands::Credits(args) => print_json(
            &tmdb
                .raw()
                .person_combined_credits(args.id)
                .await
                .context("TMDB person combined credits request failed")?,
        ),
        PersonSubcommands::TvCredits(args) => print_json(
            &tmdb
                .raw()
                .tv_person_credits(args.id)
                .await
                .context("TMDB person tv credits request failed")?,
        ),
        PersonSubcommands::Credit(args) => print_json(
            &tmdb
                .raw()
                .credit_details(&args.credit_id)
                .await
                .context("TMDB credit request failed")?,
        ),
    }
}

/// Genre tables loaded at initialization.
#[derive(Serialize)]
struct GenreTables<'a> {
    /// TV genres.
    tv: &'a tmdbkit_api::GenreMap,
    /// Movie genres.
    movie: &'a tmdbkit_api::GenreMap,
}

/// Runs the `genres` subcommand.
///
/// # Errors
///
/// Returns an error if initialization fails.
#[instrument(skip_all)]
async fn run_genres(dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = init_tmdb(dir).await?;
    let config = tmdb.config();
    print_json(&GenreTables {
        tv: &config.tv_genres,
        movie: &config.movie_genres,
    })
}

/// Runs the `providers` subcommand.
///
/// # Errors
///
/// Returns an error if initialization fails.
#[instrument(skip_all)]
async fn run_providers(dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = init_tmdb(dir).await?;
    print_json(&tmdb.config().watch_providers)
}

/// Runs `config init`.
///
/// # Errors
///
/// Returns an error if the file exists (without `--force`) or cannot be written.
#[instrument(skip_all)]
fn run_config_init(args: &ConfigInitArgs, dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;

    let template = AppConfig {
        tmdb: TmdbSection {
            api_key: Some(String::new()),
            ..TmdbSection::default()
        },
        ..AppConfig::default()
    };
    template.save(&path, args.force)?;
    tracing::info!("Wrote {}", path.display());

    Ok(())
}

/// Runs `config show`.
///
/// # Errors
///
/// Returns an error if the config cannot be read or written to stdout.
#[instrument(skip_all)]
fn run_config_show(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;
    let config = AppConfig::load(&path)?;
    tracing::info!("Config: {}", path.display());

    let content =
        toml::to_string_pretty(&config.redacted()).context("failed to serialize config to TOML")?;
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{content}").context("failed to write to stdout")
}

/// Runs `completions`.
fn run_completions(args: &CompletionsArgs) {
    let mut command = Cli::command();
    let name = command.get_name().to_owned();
    clap_complete::generate(args.shell, &mut command, name, &mut std::io::stdout());
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Movie(cmd) => run_movie(cmd.command, dir).await,
        Commands::Tv(cmd) => run_tv(cmd.command, dir).await,
        Commands::Person(cmd) => run_person(cmd.command, dir).await,
        Commands::Genres => run_genres(dir).await,
        Commands::Providers => run_providers(dir).await,
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::Init(args) => run_config_init(&args, dir),
            ConfigSubcommands::Show => run_config_show(dir),
        },
        Commands::Completions(args) => {
            run_completions(&args);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        // Arrange & Act & Assert
        Cli::command().debug_assert();
    }

    #[test]
    fn test_discover_args_to_criteria() {
        // Arrange
        let cli = Cli::try_parse_from([
            "tmdbkit",
            "movie",
            "discover",
            "--genres",
            "27,878",
            "--all-genres",
            "--cast",
            "10205",
            "--providers",
            "8,15",
            "--region",
            "US",
            "--sort-by",
            "vote_average.desc",
            "--page",
            "3",
        ])
        .unwrap();
        let Commands::Movie(MovieCommand {
            command: MovieSubcommands::Discover(args),
        }) = cli.command
        else {
            panic!("expected movie discover");
        };

        // Act
        let criteria = args.criteria();

        // Assert
        assert_eq!(args.page, 3);
        assert_eq!(criteria.genres, vec![27, 878]);
        assert_eq!(criteria.genre_compare, CompareType::And);
        assert_eq!(criteria.cast, vec![10205]);
        assert_eq!(criteria.cast_compare, CompareType::Or);
        assert_eq!(criteria.watch_providers, vec![8, 15]);
        assert_eq!(criteria.watch_region.as_deref(), Some("US"));
        assert_eq!(criteria.sort_by, Some(SortBy::VoteAverageDesc));
    }

    #[test]
    fn test_unknown_sort_order_rejected() {
        // Arrange & Act
        let result = Cli::try_parse_from([
            "tmdbkit",
            "tv",
            "discover",
            "--sort-by",
            "loudness.desc",
        ]);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_build_client_appends_trailing_slash() {
        // Arrange
        let config = AppConfig {
            tmdb: TmdbSection {
                api_key: Some(String::from("test-key")),
                bearer_token: None,
                base_url: Some(String::from("http://127.0.0.1:8080/3")),
            },
            ..AppConfig::default()
        };

        // Act
        let client = build_tmdb_client(&config).unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/3/");
    }
}
