//! `shelfmark`: command-line front end for the Shelfmark catalog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the same `ApiClient` and `SessionContext` as the browser client,
//! over the native `reqwest` transport. The server authenticates with
//! HTTP-only cookies, so `login` prints the cookie header and later
//! invocations pass it back with `--cookie` / `SHELFMARK_COOKIE`.


use catalog::native::HttpTransport;
use catalog::validation::{self, BookDraft, ReadingListDraft};
use catalog::{
    AddBookInput, ApiClient, ApiError, BookOrdering, BookQuery, ClientConfig, ConfigError, ErrorPayload, Genre,
    LoginCredentials, ProbeFailure, Registration, SessionContext, SharedSession, TransportError,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

type CliSession = SessionContext<HttpTransport, SharedSession>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Rejected(String),
    #[error("invalid {field}: {value}")]
    InvalidArgument { field: &'static str, value: String },
    #[error("not logged in ({0:?}); run `shelfmark login` and pass the printed cookie")]
    NotLoggedIn(Option<ProbeFailure>),
    #[error("output encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// One line per field so validation output reads like the web forms.
    fn rejected(payload: &ErrorPayload, fallback: &str) -> Self {
        let Some(fields) = payload_fields(payload) else {
            return Self::Rejected(payload.summary(fallback));
        };
        Self::Rejected(fields.join("\n"))
    }
}

fn payload_fields(payload: &ErrorPayload) -> Option<Vec<String>> {
    let ErrorPayload::FieldErrors(fields) = payload else {
        return None;
    };
    Some(
        fields
            .iter()
            .flat_map(|(field, messages)| {
                let label = catalog::error::humanize_field(field);
                messages.iter().map(move |message| format!("{label}: {message}"))
            })
            .collect(),
    )
}

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "shelfmark", about = "Shelfmark book catalog and reading-list CLI")]
struct Cli {
    /// API root, e.g. `http://127.0.0.1:8000/api`.
    #[arg(long, env = "SHELFMARK_BASE_URL")]
    base_url: Option<String>,

    /// Cookie header printed by `shelfmark login`.
    #[arg(long, env = "SHELFMARK_COOKIE")]
    cookie: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print the session cookie header.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SHELFMARK_PASSWORD")]
        password: String,
    },
    /// Invalidate the server session.
    Logout,
    /// Show the user the current cookie belongs to.
    Whoami,
    /// Create an account (does not log in).
    Register(RegisterArgs),
    Book(BookCommand),
    List(ListCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "SHELFMARK_PASSWORD")]
    password: String,
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
}

#[derive(Args, Debug)]
struct BookCommand {
    #[command(subcommand)]
    command: BookSubcommand,
}

#[derive(Subcommand, Debug)]
enum BookSubcommand {
    List {
        #[arg(long)]
        search: Option<String>,
        /// Wire genre name, e.g. `sci_fi`.
        #[arg(long)]
        genre: Option<String>,
        /// Ordering parameter, e.g. `-created_at` or `title`.
        #[arg(long, default_value = "-created_at", allow_hyphen_values = true)]
        ordering: String,
    },
    Get {
        id: i64,
    },
    Create(BookFields),
    /// Replace a book; omitted fields keep their current values.
    Update {
        id: i64,
        #[command(flatten)]
        fields: BookFields,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug, Default)]
struct BookFields {
    #[arg(long)]
    title: Option<String>,
    /// Comma-separated author names.
    #[arg(long)]
    authors: Option<String>,
    #[arg(long)]
    genre: Option<String>,
    /// `YYYY-MM-DD`.
    #[arg(long)]
    published: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    isbn: Option<String>,
    #[arg(long)]
    pages: Option<String>,
}

impl BookFields {
    fn apply(self, draft: &mut BookDraft) {
        let BookFields { title, authors, genre, published, description, isbn, pages } = self;
        overlay(&mut draft.title, title);
        overlay(&mut draft.authors, authors);
        overlay(&mut draft.genre, genre);
        overlay(&mut draft.publication_date, published);
        overlay(&mut draft.description, description);
        overlay(&mut draft.isbn, isbn);
        overlay(&mut draft.pages, pages);
    }
}

#[derive(Args, Debug)]
struct ListCommand {
    #[command(subcommand)]
    command: ListSubcommand,
}

#[derive(Subcommand, Debug)]
enum ListSubcommand {
    List,
    Get {
        id: i64,
    },
    Create(ListFields),
    /// Replace a list; omitted fields keep their current values.
    Update {
        id: i64,
        #[command(flatten)]
        fields: ListFields,
    },
    Delete {
        id: i64,
    },
    AddBook {
        list_id: i64,
        book_id: i64,
        #[arg(long, default_value = "")]
        notes: String,
    },
    RemoveItem {
        list_id: i64,
        item_id: i64,
    },
}

#[derive(Args, Debug, Default)]
struct ListFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    public: Option<bool>,
}

impl ListFields {
    fn apply(self, draft: &mut ReadingListDraft) {
        overlay(&mut draft.name, self.name);
        overlay(&mut draft.description, self.description);
        if let Some(public) = self.public {
            draft.is_public = public;
        }
    }
}

fn overlay(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn book_query(search: Option<String>, genre: Option<String>, ordering: &str) -> Result<BookQuery, CliError> {
    let genre = match genre {
        Some(raw) => Some(
            Genre::from_wire(&raw).ok_or(CliError::InvalidArgument { field: "genre", value: raw })?,
        ),
        None => None,
    };
    let ordering = BookOrdering::from_param(ordering)
        .ok_or_else(|| CliError::InvalidArgument { field: "ordering", value: ordering.to_owned() })?;
    Ok(BookQuery { search, genre, ordering })
}

// =============================================================================
// ENTRYPOINT
// =============================================================================

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = connect(cli.base_url.as_deref(), cli.cookie.as_deref())?;

    match cli.command {
        Command::Login { email, password } => run_login(&session, email, password).await,
        Command::Logout => run_logout(&session).await,
        Command::Whoami => run_whoami(&session).await,
        Command::Register(args) => run_register(&session, args).await,
        Command::Book(book) => run_book(&session, book.command).await,
        Command::List(list) => run_list(&session, list.command).await,
    }
}

fn connect(base_url: Option<&str>, cookie: Option<&str>) -> Result<CliSession, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = base_url {
        config.base_url = base_url.trim_end_matches('/').to_owned();
    }
    let mut transport = HttpTransport::new(&config)?;
    if let Some(cookie) = cookie {
        transport = transport.with_cookie(cookie);
    }
    tracing::debug!(base_url = %config.base_url, with_cookie = cookie.is_some(), "client ready");
    Ok(SessionContext::new(ApiClient::new(transport), SharedSession::default()))
}

// =============================================================================
// AUTH
// =============================================================================

async fn run_login(session: &CliSession, email: String, password: String) -> Result<(), CliError> {
    let credentials = LoginCredentials { email: email.trim().to_owned(), password };
    validation::validate_login(&credentials).map_err(|payload| CliError::rejected(&payload, "Login failed"))?;
    session
        .login(&credentials)
        .await
        .map_err(|payload| CliError::rejected(&payload, "Login failed"))?;

    let snapshot = session.snapshot();
    if let Some(user) = snapshot.user() {
        eprintln!("logged in as {} <{}>", user.username, user.email);
    }
    match session.api().transport().cookie_header() {
        Some(header) => println!("{header}"),
        None => eprintln!("server set no cookies"),
    }
    Ok(())
}

async fn run_logout(session: &CliSession) -> Result<(), CliError> {
    let outcome = session.logout().await;
    if outcome.server_acknowledged {
        println!("logged out");
    } else {
        println!("logged out locally; the server did not acknowledge");
    }
    Ok(())
}

async fn run_whoami(session: &CliSession) -> Result<(), CliError> {
    session.initialize().await;
    let snapshot = session.snapshot();
    let Some(user) = snapshot.user() else {
        return Err(CliError::NotLoggedIn(snapshot.probe_failure()));
    };
    print_json(user)
}

async fn run_register(session: &CliSession, args: RegisterArgs) -> Result<(), CliError> {
    let registration = Registration {
        username: args.username.trim().to_owned(),
        email: args.email.trim().to_owned(),
        password_confirm: args.password.clone(),
        password: args.password,
        first_name: args.first_name,
        last_name: args.last_name,
    };
    validation::validate_registration(&registration)
        .map_err(|payload| CliError::rejected(&payload, "Registration failed"))?;
    session
        .register(&registration)
        .await
        .map_err(|payload| CliError::rejected(&payload, "Registration failed"))?;
    println!("registered {}; run `shelfmark login` to sign in", registration.username);
    Ok(())
}

// =============================================================================
// BOOKS
// =============================================================================

async fn run_book(session: &CliSession, command: BookSubcommand) -> Result<(), CliError> {
    let books = session.api().books();
    match command {
        BookSubcommand::List { search, genre, ordering } => {
            let query = book_query(search, genre, &ordering)?;
            print_json(&books.list(&query).await?)
        }
        BookSubcommand::Get { id } => print_json(&books.get(id).await?),
        BookSubcommand::Create(fields) => {
            let mut draft = BookDraft::default();
            fields.apply(&mut draft);
            let input = draft.to_input().map_err(|payload| CliError::rejected(&payload, "Invalid book"))?;
            books.create(&input).await.map_err(|error| api_rejected(error, "Failed to create book"))?;
            println!("created \"{}\"", input.title);
            Ok(())
        }
        BookSubcommand::Update { id, fields } => {
            let mut draft = BookDraft::from_book(&books.get(id).await?);
            fields.apply(&mut draft);
            let input = draft.to_input().map_err(|payload| CliError::rejected(&payload, "Invalid book"))?;
            books.update(id, &input).await.map_err(|error| api_rejected(error, "Failed to update book"))?;
            println!("updated book {id}");
            Ok(())
        }
        BookSubcommand::Delete { id } => {
            books.delete(id).await?;
            println!("deleted book {id}");
            Ok(())
        }
    }
}

// =============================================================================
// READING LISTS
// =============================================================================

async fn run_list(session: &CliSession, command: ListSubcommand) -> Result<(), CliError> {
    let lists = session.api().reading_lists();
    match command {
        ListSubcommand::List => print_json(&lists.list().await?),
        ListSubcommand::Get { id } => print_json(&lists.get(id).await?),
        ListSubcommand::Create(fields) => {
            let mut draft = ReadingListDraft::default();
            fields.apply(&mut draft);
            let input = draft.to_input().map_err(|payload| CliError::rejected(&payload, "Invalid reading list"))?;
            lists
                .create(&input)
                .await
                .map_err(|error| api_rejected(error, "Failed to create reading list"))?;
            println!("created \"{}\"", input.name);
            Ok(())
        }
        ListSubcommand::Update { id, fields } => {
            let mut draft = ReadingListDraft::from_list(&lists.get(id).await?);
            fields.apply(&mut draft);
            let input = draft.to_input().map_err(|payload| CliError::rejected(&payload, "Invalid reading list"))?;
            lists
                .update(id, &input)
                .await
                .map_err(|error| api_rejected(error, "Failed to update reading list"))?;
            println!("updated reading list {id}");
            Ok(())
        }
        ListSubcommand::Delete { id } => {
            lists.delete(id).await?;
            println!("deleted reading list {id}");
            Ok(())
        }
        ListSubcommand::AddBook { list_id, book_id, notes } => {
            let item = lists
                .add_book(list_id, &AddBookInput { book_id, notes })
                .await
                .map_err(|error| api_rejected(error, "Failed to add book to list"))?;
            print_json(&item)
        }
        ListSubcommand::RemoveItem { list_id, item_id } => {
            lists.remove_item(list_id, item_id).await?;
            println!("removed item {item_id} from reading list {list_id}");
            Ok(())
        }
    }
}

/// Validation responses become readable field lines; everything else keeps
/// its typed error.
fn api_rejected(error: ApiError, fallback: &str) -> CliError {
    match error.payload() {
        Some(payload @ (ErrorPayload::FieldErrors(_) | ErrorPayload::NonFieldErrors(_))) => {
            CliError::rejected(payload, fallback)
        }
        _ => CliError::Api(error),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
