//! tmdbone - command-line access to the TMDb v3 API.

/// Application configuration (TOML).
mod config;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tmdbone_api::resources::{ExternalSource, TimeWindow};
use tmdbone_api::{ImageHelper, ImageSize, Params, TmdbClient, TmdbClientBuilder};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, resolve_config_path};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Config directory (default: `$TMDBONE_CONFIG_DIR` or `~/.config/tmdbone`).
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Response language (e.g. "ja-JP"). Overrides config and `TMDB_LANGUAGE`.
    #[arg(long, global = true)]
    language: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Get movie data.
    Movie(MovieArgs),
    /// Get TV series, season or episode data.
    Tv(TvArgs),
    /// Get person data.
    Person(PersonArgs),
    /// Get collection data.
    Collection(CollectionArgs),
    /// Get production company data.
    Company(OrgArgs),
    /// Get TV network data.
    Network(OrgArgs),
    /// Get keyword data.
    Keyword(KeywordArgs),
    /// Get a review.
    Review(TextIdArgs),
    /// Get a credit.
    Credit(TextIdArgs),
    /// Search by text query.
    Search(SearchArgs),
    /// Discover movies or TV series by filters.
    Discover(DiscoverArgs),
    /// List trending items.
    Trending(TrendingArgs),
    /// Find items by an external ID.
    Find(FindArgs),
    /// List official genres.
    Genres(MediaArgs),
    /// List official certifications.
    Certifications(MediaArgs),
    /// Get API configuration data.
    Configuration(ConfigurationArgs),
    /// Print a full image URL (no request is made).
    Image(ImageArgs),
    /// Inspect the local configuration.
    Config(ConfigCommand),
}

/// Movie sub-endpoints.
#[derive(Clone, Copy, Default, ValueEnum)]
enum MovieEndpoint {
    #[default]
    Details,
    AlternativeTitles,
    Credits,
    ExternalIds,
    Images,
    Keywords,
    Lists,
    Recommendations,
    ReleaseDates,
    Reviews,
    Similar,
    Translations,
    Videos,
    WatchProviders,
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieArgs {
    /// TMDb movie ID.
    id: u64,
    /// Sub-endpoint to query.
    #[arg(long, value_enum, default_value_t)]
    endpoint: MovieEndpoint,
    /// Comma-separated sub-requests for `append_to_response` (e.g. "credits,images").
    #[arg(long, value_delimiter = ',')]
    append: Vec<String>,
}

/// TV sub-endpoints. Seasons and episodes support a subset.
#[derive(Clone, Copy, Default, ValueEnum)]
enum TvEndpoint {
    #[default]
    Details,
    AggregateCredits,
    AlternativeTitles,
    ContentRatings,
    Credits,
    ExternalIds,
    Images,
    Keywords,
    Recommendations,
    ScreenedTheatrically,
    Similar,
    Translations,
    Videos,
    WatchProviders,
}

/// Arguments for the `tv` subcommand.
#[derive(clap::Args)]
struct TvArgs {
    /// TMDb series ID.
    id: u64,
    /// Season number.
    #[arg(long)]
    season: Option<u32>,
    /// Episode number (requires --season).
    #[arg(long, requires = "season")]
    episode: Option<u32>,
    /// Sub-endpoint to query.
    #[arg(long, value_enum, default_value_t)]
    endpoint: TvEndpoint,
    /// Comma-separated sub-requests for `append_to_response`.
    #[arg(long, value_delimiter = ',')]
    append: Vec<String>,
}

/// Person sub-endpoints.
#[derive(Clone, Copy, Default, ValueEnum)]
enum PersonEndpoint {
    #[default]
    Details,
    MovieCredits,
    TvCredits,
    CombinedCredits,
    ExternalIds,
    Images,
    Translations,
}

/// Arguments for the `person` subcommand.
#[derive(clap::Args)]
struct PersonArgs {
    /// TMDb person ID.
    id: u64,
    /// Sub-endpoint to query.
    #[arg(long, value_enum, default_value_t)]
    endpoint: PersonEndpoint,
}

/// Collection sub-endpoints.
#[derive(Clone, Copy, Default, ValueEnum)]
enum CollectionEndpoint {
    #[default]
    Details,
    Images,
    Translations,
}

/// Arguments for the `collection` subcommand.
#[derive(clap::Args)]
struct CollectionArgs {
    /// TMDb collection ID.
    id: u64,
    /// Sub-endpoint to query.
    #[arg(long, value_enum, default_value_t)]
    endpoint: CollectionEndpoint,
}

/// Company and network sub-endpoints.
#[derive(Clone, Copy, Default, ValueEnum)]
enum OrgEndpoint {
    #[default]
    Details,
    AlternativeNames,
    Images,
}

/// Arguments for the `company` and `network` subcommands.
#[derive(clap::Args)]
struct OrgArgs {
    /// TMDb company or network ID.
    id: u64,
    /// Sub-endpoint to query.
    #[arg(long, value_enum, default_value_t)]
    endpoint: OrgEndpoint,
}

/// Keyword sub-endpoints.
#[derive(Clone, Copy, Default, ValueEnum)]
enum KeywordEndpoint {
    #[default]
    Details,
    Movies,
}

/// Arguments for the `keyword` subcommand.
#[derive(clap::Args)]
struct KeywordArgs {
    /// TMDb keyword ID.
    id: u64,
    /// Sub-endpoint to query.
    #[arg(long, value_enum, default_value_t)]
    endpoint: KeywordEndpoint,
}

/// Arguments for subcommands keyed by a string ID.
#[derive(clap::Args)]
struct TextIdArgs {
    /// TMDb ID (e.g. "52fe4250c3a36847f80149f3").
    id: String,
}

/// Search targets.
#[derive(Clone, Copy, ValueEnum)]
enum SearchKind {
    Movie,
    Tv,
    Person,
    Company,
    Collection,
    Keyword,
    Multi,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// What to search.
    #[arg(value_enum)]
    kind: SearchKind,
    /// Search query (e.g. "SPY×FAMILY").
    query: String,
    /// Result page (1-based).
    #[arg(long)]
    page: Option<u32>,
    /// Filter by release year (movie) or first air year (tv).
    #[arg(long)]
    year: Option<u32>,
    /// Include adult results.
    #[arg(long)]
    include_adult: bool,
}

/// Movie or TV.
#[derive(Clone, Copy, ValueEnum)]
enum MediaKind {
    Movie,
    Tv,
}

/// Arguments for the `genres` and `certifications` subcommands.
#[derive(clap::Args)]
struct MediaArgs {
    /// Movie or TV list.
    #[arg(value_enum)]
    kind: MediaKind,
}

/// Arguments for the `discover` subcommand.
#[derive(clap::Args)]
struct DiscoverArgs {
    /// Movie or TV discovery.
    #[arg(value_enum)]
    kind: MediaKind,
    /// Filter as `key=value` (repeatable, e.g. `--param with_genres=16`).
    #[arg(long = "param", value_parser = parse_key_value)]
    params: Vec<(String, String)>,
}

/// Trending media types.
#[derive(Clone, Copy, ValueEnum)]
enum TrendingMedia {
    All,
    Movie,
    Tv,
    Person,
}

/// Trending windows.
#[derive(Clone, Copy, Default, ValueEnum)]
enum WindowArg {
    #[default]
    Day,
    Week,
}

impl From<WindowArg> for TimeWindow {
    fn from(value: WindowArg) -> Self {
        match value {
            WindowArg::Day => Self::Day,
            WindowArg::Week => Self::Week,
        }
    }
}

/// Arguments for the `trending` subcommand.
#[derive(clap::Args)]
struct TrendingArgs {
    /// Media type.
    #[arg(value_enum)]
    media: TrendingMedia,
    /// Time window.
    #[arg(long, value_enum, default_value_t)]
    window: WindowArg,
}

/// External ID namespaces.
#[derive(Clone, Copy, Default, ValueEnum)]
#[value(rename_all = "snake_case")]
enum SourceArg {
    #[default]
    ImdbId,
    TvdbId,
    FreebaseMid,
    FreebaseId,
    TvrageId,
    FacebookId,
    InstagramId,
    TwitterId,
    TiktokId,
    WikidataId,
    YoutubeId,
}

impl From<SourceArg> for ExternalSource {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::ImdbId => Self::ImdbId,
            SourceArg::TvdbId => Self::TvdbId,
            SourceArg::FreebaseMid => Self::FreebaseMid,
            SourceArg::FreebaseId => Self::FreebaseId,
            SourceArg::TvrageId => Self::TvrageId,
            SourceArg::FacebookId => Self::FacebookId,
            SourceArg::InstagramId => Self::InstagramId,
            SourceArg::TwitterId => Self::TwitterId,
            SourceArg::TiktokId => Self::TiktokId,
            SourceArg::WikidataId => Self::WikidataId,
            SourceArg::YoutubeId => Self::YoutubeId,
        }
    }
}

/// Arguments for the `find` subcommand.
#[derive(clap::Args)]
struct FindArgs {
    /// External ID (e.g. "tt0137523").
    external_id: String,
    /// Namespace of the external ID.
    #[arg(long, value_enum, default_value_t)]
    source: SourceArg,
}

/// Configuration sections.
#[derive(Clone, Copy, Default, ValueEnum)]
enum ConfigurationPart {
    #[default]
    Details,
    Countries,
    Jobs,
    Languages,
    PrimaryTranslations,
    Timezones,
}

/// Arguments for the `configuration` subcommand.
#[derive(clap::Args)]
struct ConfigurationArgs {
    /// Section to fetch.
    #[arg(long, value_enum, default_value_t)]
    what: ConfigurationPart,
}

/// Arguments for the `image` subcommand.
#[derive(clap::Args)]
struct ImageArgs {
    /// Image path from an API response (e.g. "/abc.jpg").
    path: String,
    /// Size segment (e.g. "w500", "original").
    #[arg(long, default_value = "original")]
    size: String,
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
    /// Print the effective configuration with secrets masked.
    Show,
    /// Print the config file path.
    Path,
    /// Write a config file from the current environment overrides.
    Init,
}

/// Parses a `key=value` pair.
fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => {
            Ok((String::from(k.trim()), String::from(v.trim())))
        }
        _ => Err(format!("expected key=value, got `{raw}`")),
    }
}

/// Params carrying `append_to_response` when `append` is non-empty.
fn append_params(append: &[String]) -> Params {
    let names: Vec<&String> = append.iter().filter(|s| !s.trim().is_empty()).collect();
    if names.is_empty() {
        Params::new()
    } else {
        Params::new().append(names)
    }
}

/// Loads the config file and applies environment and flag overrides.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&PathBuf>, language: Option<&str>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let mut config = AppConfig::load(&config_path).context("failed to load config")?;
    config.apply_env();
    if let Some(language) = language {
        config.tmdb.language = Some(String::from(language));
    }
    Ok(config)
}

/// Builds a `TmdbClient` from the effective configuration.
///
/// # Errors
///
/// Returns an error if no credential is configured or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client(dir: Option<&PathBuf>, language: Option<&str>) -> Result<TmdbClient> {
    let config = load_config(dir, language)?;
    if !config.tmdb.has_credentials() {
        bail!(
            "no TMDb credentials configured: set TMDB_API_KEY, TMDB_API_KEYS or TMDB_API_TOKEN, \
             or add [tmdb] api_keys to the config file"
        );
    }
    tracing::debug!(
        keys = config.tmdb.api_keys.len(),
        bearer = config.tmdb.bearer_token.is_some(),
        "building TMDb client"
    );

    TmdbClientBuilder::from_config(&config.tmdb)
        .context("invalid TMDb client config")?
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build TMDb client")
}

/// Writes `value` to stdout as pretty JSON (`null` when absent).
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
fn print_json(value: Option<&Value>) -> Result<()> {
    if value.is_none() {
        tracing::info!("resource not found");
    }
    let rendered = serde_json::to_string_pretty(&value).context("failed to serialize response")?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{rendered}").context("failed to write to stdout")
}

/// Writes a plain line to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
fn print_line(line: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{line}").context("failed to write to stdout")
}

/// Runs the `movie` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all, fields(id = args.id))]
async fn run_movie(client: &TmdbClient, args: &MovieArgs) -> Result<Option<Value>> {
    let movie = client.movie(args.id);
    let params = append_params(&args.append);
    let result = match args.endpoint {
        MovieEndpoint::Details => movie.details(params).await,
        MovieEndpoint::AlternativeTitles => movie.alternative_titles(params).await,
        MovieEndpoint::Credits => movie.credits(params).await,
        MovieEndpoint::ExternalIds => movie.external_ids(params).await,
        MovieEndpoint::Images => movie.images(params).await,
        MovieEndpoint::Keywords => movie.keywords(params).await,
        MovieEndpoint::Lists => movie.lists(params).await,
        MovieEndpoint::Recommendations => movie.recommendations(params).await,
        MovieEndpoint::ReleaseDates => movie.release_dates(params).await,
        MovieEndpoint::Reviews => movie.reviews(params).await,
        MovieEndpoint::Similar => movie.similar(params).await,
        MovieEndpoint::Translations => movie.translations(params).await,
        MovieEndpoint::Videos => movie.videos(params).await,
        MovieEndpoint::WatchProviders => movie.watch_providers(params).await,
    };
    result.context("TMDb movie request failed")
}

/// Runs the `tv` subcommand for a series, season or episode.
///
/// # Errors
///
/// Returns an error if the endpoint is not available at the requested level
/// or the API request fails.
#[instrument(skip_all, fields(id = args.id, season = args.season, episode = args.episode))]
async fn run_tv(client: &TmdbClient, args: &TvArgs) -> Result<Option<Value>> {
    let params = append_params(&args.append);
    let result = match (args.season, args.episode) {
        (Some(season), Some(episode)) => {
            let episode = client.episode(args.id, season, episode);
            match args.endpoint {
                TvEndpoint::Details => episode.details(params).await,
                TvEndpoint::Credits => episode.credits(params).await,
                TvEndpoint::ExternalIds => episode.external_ids(params).await,
                TvEndpoint::Images => episode.images(params).await,
                TvEndpoint::Translations => episode.translations(params).await,
                TvEndpoint::Videos => episode.videos(params).await,
                _ => bail!("this --endpoint is not available for episodes"),
            }
        }
        (Some(season), None) => {
            let season = client.season(args.id, season);
            match args.endpoint {
                TvEndpoint::Details => season.details(params).await,
                TvEndpoint::AggregateCredits => season.aggregate_credits(params).await,
                TvEndpoint::Credits => season.credits(params).await,
                TvEndpoint::ExternalIds => season.external_ids(params).await,
                TvEndpoint::Images => season.images(params).await,
                TvEndpoint::Translations => season.translations(params).await,
                TvEndpoint::Videos => season.videos(params).await,
                _ => bail!("this --endpoint is not available for seasons"),
            }
        }
        (None, _) => {
            let tv = client.tv(args.id);
            match args.endpoint {
                TvEndpoint::Details => tv.details(params).await,
                TvEndpoint::AggregateCredits => tv.aggregate_credits(params).await,
                TvEndpoint::AlternativeTitles => tv.alternative_titles(params).await,
                TvEndpoint::ContentRatings => tv.content_ratings(params).await,
                TvEndpoint::Credits => tv.credits(params).await,
                TvEndpoint::ExternalIds => tv.external_ids(params).await,
                TvEndpoint::Images => tv.images(params).await,
                TvEndpoint::Keywords => tv.keywords(params).await,
                TvEndpoint::Recommendations => tv.recommendations(params).await,
                TvEndpoint::ScreenedTheatrically => tv.screened_theatrically(params).await,
                TvEndpoint::Similar => tv.similar(params).await,
                TvEndpoint::Translations => tv.translations(params).await,
                TvEndpoint::Videos => tv.videos(params).await,
                TvEndpoint::WatchProviders => tv.watch_providers(params).await,
            }
        }
    };
    result.context("TMDb tv request failed")
}

/// Runs the `person` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all, fields(id = args.id))]
async fn run_person(client: &TmdbClient, args: &PersonArgs) -> Result<Option<Value>> {
    let person = client.person(args.id);
    let params = Params::new();
    let result = match args.endpoint {
        PersonEndpoint::Details => person.details(params).await,
        PersonEndpoint::MovieCredits => person.movie_credits(params).await,
        PersonEndpoint::TvCredits => person.tv_credits(params).await,
        PersonEndpoint::CombinedCredits => person.combined_credits(params).await,
        PersonEndpoint::ExternalIds => person.external_ids(params).await,
        PersonEndpoint::Images => person.images(params).await,
        PersonEndpoint::Translations => person.translations(params).await,
    };
    result.context("TMDb person request failed")
}

/// Runs the `collection`, `company`, `network`, `keyword`, `review` and
/// `credit` subcommands.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_catalog(client: &TmdbClient, command: &Commands) -> Result<Option<Value>> {
    let params = Params::new();
    let result = match command {
        Commands::Collection(args) => {
            let collection = client.collection(args.id);
            match args.endpoint {
                CollectionEndpoint::Details => collection.details(params).await,
                CollectionEndpoint::Images => collection.images(params).await,
                CollectionEndpoint::Translations => collection.translations(params).await,
            }
        }
        Commands::Company(args) => {
            let company = client.company(args.id);
            match args.endpoint {
                OrgEndpoint::Details => company.details(params).await,
                OrgEndpoint::AlternativeNames => company.alternative_names(params).await,
                OrgEndpoint::Images => company.images(params).await,
            }
        }
        Commands::Network(args) => {
            let network = client.network(args.id);
            match args.endpoint {
                OrgEndpoint::Details => network.details(params).await,
                OrgEndpoint::AlternativeNames => network.alternative_names(params).await,
                OrgEndpoint::Images => network.images(params).await,
            }
        }
        Commands::Keyword(args) => {
            let keyword = client.keyword(args.id);
            match args.endpoint {
                KeywordEndpoint::Details => keyword.details(params).await,
                KeywordEndpoint::Movies => keyword.movies(params).await,
            }
        }
        Commands::Review(args) => client.review(&args.id).details(params).await,
        Commands::Credit(args) => client.credit(&args.id).details(params).await,
        _ => bail!("not a catalog subcommand"),
    };
    result.context("TMDb request failed")
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all, fields(query = %args.query))]
async fn run_search(client: &TmdbClient, args: &SearchArgs) -> Result<Option<Value>> {
    let mut params = Params::new().set("page", args.page);
    if args.include_adult {
        params.insert("include_adult", true);
    }
    if let Some(year) = args.year {
        match args.kind {
            SearchKind::Movie => params.insert("year", year),
            SearchKind::Tv => params.insert("first_air_date_year", year),
            _ => tracing::warn!("--year is ignored for this search kind"),
        }
    }

    let search = client.search();
    let query = args.query.as_str();
    let result = match args.kind {
        SearchKind::Movie => search.movie(query, params).await,
        SearchKind::Tv => search.tv(query, params).await,
        SearchKind::Person => search.person(query, params).await,
        SearchKind::Company => search.company(query, params).await,
        SearchKind::Collection => search.collection(query, params).await,
        SearchKind::Keyword => search.keyword(query, params).await,
        SearchKind::Multi => search.multi(query, params).await,
    };
    result.context("TMDb search request failed")
}

/// Runs the `discover` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_discover(client: &TmdbClient, args: &DiscoverArgs) -> Result<Option<Value>> {
    let params: Params = args.params.iter().cloned().collect();
    let discover = client.discover();
    let result = match args.kind {
        MediaKind::Movie => discover.movie(params).await,
        MediaKind::Tv => discover.tv(params).await,
    };
    result.context("TMDb discover request failed")
}

/// Runs the `trending` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_trending(client: &TmdbClient, args: &TrendingArgs) -> Result<Option<Value>> {
    let trending = client.trending();
    let window = TimeWindow::from(args.window);
    let result = match args.media {
        TrendingMedia::All => trending.all(window).await,
        TrendingMedia::Movie => trending.movie(window).await,
        TrendingMedia::Tv => trending.tv(window).await,
        TrendingMedia::Person => trending.person(window).await,
    };
    result.context("TMDb trending request failed")
}

/// Runs the `genres`, `certifications` and `configuration` subcommands.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_reference(client: &TmdbClient, command: &Commands) -> Result<Option<Value>> {
    let result = match command {
        Commands::Genres(args) => {
            let genre = client.genre();
            match args.kind {
                MediaKind::Movie => genre.movie_list(Params::new()).await,
                MediaKind::Tv => genre.tv_list(Params::new()).await,
            }
        }
        Commands::Certifications(args) => {
            let certification = client.certification();
            match args.kind {
                MediaKind::Movie => certification.movie_list().await,
                MediaKind::Tv => certification.tv_list().await,
            }
        }
        Commands::Configuration(args) => {
            let configuration = client.configuration();
            match args.what {
                ConfigurationPart::Details => configuration.api_details().await,
                ConfigurationPart::Countries => configuration.countries().await,
                ConfigurationPart::Jobs => configuration.jobs().await,
                ConfigurationPart::Languages => configuration.languages().await,
                ConfigurationPart::PrimaryTranslations => {
                    configuration.primary_translations().await
                }
                ConfigurationPart::Timezones => configuration.timezones().await,
            }
        }
        _ => bail!("not a reference subcommand"),
    };
    result.context("TMDb reference request failed")
}

/// Runs the `config` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, serialized or written,
/// or if `init` would overwrite an existing file.
fn run_config(cmd: &ConfigCommand, dir: Option<&PathBuf>, language: Option<&str>) -> Result<()> {
    match cmd.command {
        ConfigSubcommands::Path => {
            let path = resolve_config_path(dir).context("failed to resolve config path")?;
            print_line(&path.display().to_string())
        }
        ConfigSubcommands::Init => {
            let path = resolve_config_path(dir).context("failed to resolve config path")?;
            if path.exists() {
                bail!("config file already exists: {}", path.display());
            }
            let mut config = AppConfig::default();
            config.apply_env();
            if let Some(language) = language {
                config.tmdb.language = Some(String::from(language));
            }
            config.save(&path)?;
            tracing::info!(path = %path.display(), "config file written");
            print_line(&path.display().to_string())
        }
        ConfigSubcommands::Show => {
            let config = load_config(dir, language)?;
            let shown = AppConfig {
                tmdb: config.tmdb.redacted(),
            };
            let rendered =
                toml::to_string_pretty(&shown).context("failed to serialize config to TOML")?;
            print_line(rendered.trim_end())
        }
    }
}

/// Dispatches a parsed command line.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
async fn run(cli: &Cli) -> Result<()> {
    let dir = cli.dir.as_ref();
    let language = cli.language.as_deref();

    match &cli.command {
        Commands::Image(args) => {
            return print_line(&ImageHelper::url(
                Some(&args.path),
                &ImageSize::from(args.size.as_str()),
            ));
        }
        Commands::Config(cmd) => return run_config(cmd, dir, language),
        _ => {}
    }

    let client = build_tmdb_client(dir, language)?;
    let value = match &cli.command {
        Commands::Movie(args) => run_movie(&client, args).await?,
        Commands::Tv(args) => run_tv(&client, args).await?,
        Commands::Person(args) => run_person(&client, args).await?,
        Commands::Search(args) => run_search(&client, args).await?,
        Commands::Discover(args) => run_discover(&client, args).await?,
        Commands::Trending(args) => run_trending(&client, args).await?,
        Commands::Find(args) => client
            .find(&args.external_id)
            .by(args.source.into(), Params::new())
            .await
            .context("TMDb find request failed")?,
        command @ (Commands::Genres(_)
        | Commands::Certifications(_)
        | Commands::Configuration(_)) => run_reference(&client, command).await?,
        command => run_catalog(&client, command).await?,
    };
    print_json(value.as_ref())
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

    run(&Cli::parse()).await
}
