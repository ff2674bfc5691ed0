//! Command-line interface definitions using clap
//!
//! This module defines the CLI argument structures using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic.
//!
//! Each command follows the same structure: a clap `Args` struct carrying the
//! CLI-specific attributes (flags, aliases, help text), and a `From`
//! conversion into the corresponding core parameter type. Core parameter
//! types stay free of clap derives and can be reused by other interfaces.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use shelfmark_core::{
    display::{Books, Confirmation, CreateResult, DeleteResult, Friends, Loans, OverdueLoans},
    models::{BookFilter, Condition, ShelfLocation, StockFilter},
    params::{
        AddContact, ContactEntry, CreateBook, CreateFriend, CreateLoan, Id, ReturnLoan,
        UpdateBook, UpdateFriend,
    },
    Library,
};

use crate::renderer::TerminalRenderer;

/// Today's date in the system time zone, used for borrow-date defaults.
fn today() -> Date {
    jiff::Zoned::now().date()
}

// ============================================================================
// Book commands
// ============================================================================

/// Physical condition values accepted on the command line.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ConditionArg {
    Excellent,
    Good,
    Fair,
}

impl From<ConditionArg> for Condition {
    fn from(val: ConditionArg) -> Self {
        match val {
            ConditionArg::Excellent => Condition::Excellent,
            ConditionArg::Good => Condition::Good,
            ConditionArg::Fair => Condition::Fair,
        }
    }
}

/// Shelf identifiers accepted on the command line.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ShelfLocationArg {
    A1,
    B1,
    C1,
}

impl From<ShelfLocationArg> for ShelfLocation {
    fn from(val: ShelfLocationArg) -> Self {
        match val {
            ShelfLocationArg::A1 => ShelfLocation::A1,
            ShelfLocationArg::B1 => ShelfLocation::B1,
            ShelfLocationArg::C1 => ShelfLocation::C1,
        }
    }
}

/// Stock-status filter values for `book list`.
#[derive(Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum StockFilterArg {
    #[default]
    All,
    InStock,
    OnLoan,
}

impl From<StockFilterArg> for StockFilter {
    fn from(val: StockFilterArg) -> Self {
        match val {
            StockFilterArg::All => StockFilter::All,
            StockFilterArg::InStock => StockFilter::InStock,
            StockFilterArg::OnLoan => StockFilter::OnLoan,
        }
    }
}

/// Add a book to the catalog
#[derive(Args)]
pub struct AddBookArgs {
    /// ISBN identifying the book (must be unique)
    pub isbn: String,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    #[arg(short, long, default_value = "Fiction", help = "Genre label")]
    pub genre: String,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = ConditionArg::Good,
        help = "Physical condition of the copy"
    )]
    pub condition: ConditionArg,
    #[arg(
        short = 'l',
        long,
        value_enum,
        default_value_t = ShelfLocationArg::A1,
        help = "Shelf the book lives on"
    )]
    pub location: ShelfLocationArg,
    #[arg(short = 'r', long, default_value_t = 1, help = "Row within the shelf (1-3)")]
    pub row: u8,
}

impl From<AddBookArgs> for CreateBook {
    fn from(val: AddBookArgs) -> Self {
        CreateBook {
            isbn: val.isbn,
            title: val.title,
            author: val.author,
            genre: val.genre,
            condition: val.condition.into(),
            shelf_location: val.location.into(),
            shelf_row: val.row,
        }
    }
}

/// List books in the catalog
///
/// Without flags, every book is shown ordered by title. The filters combine:
/// `--search` matches a substring of title, author, or ISBN, `--genre`
/// matches the genre label exactly, and `--stock` narrows by availability.
#[derive(Args)]
pub struct ListBooksArgs {
    #[arg(short, long, help = "Substring to match against title, author, or ISBN")]
    pub search: Option<String>,
    #[arg(short, long, help = "Exact genre label to filter by")]
    pub genre: Option<String>,
    #[arg(
        long,
        value_enum,
        default_value_t = StockFilterArg::All,
        help = "Narrow to books on the shelf or out on loan"
    )]
    pub stock: StockFilterArg,
}

impl From<ListBooksArgs> for BookFilter {
    fn from(val: ListBooksArgs) -> Self {
        BookFilter {
            text: val.search,
            genre: val.genre,
            stock: val.stock.into(),
        }
    }
}

/// Show details of a single book
#[derive(Args)]
pub struct ShowBookArgs {
    /// ISBN of the book to show
    pub isbn: String,
}

/// Update a book's catalog entry
///
/// Every field is rewritten from the supplied values; the ISBN identifies the
/// book and cannot itself change.
#[derive(Args)]
pub struct UpdateBookArgs {
    /// ISBN of the book to update
    pub isbn: String,
    /// New title
    pub title: String,
    /// New author
    pub author: String,
    #[arg(short, long, default_value = "Fiction", help = "Genre label")]
    pub genre: String,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = ConditionArg::Good,
        help = "Physical condition of the copy"
    )]
    pub condition: ConditionArg,
    #[arg(
        short = 'l',
        long,
        value_enum,
        default_value_t = ShelfLocationArg::A1,
        help = "Shelf the book lives on"
    )]
    pub location: ShelfLocationArg,
    #[arg(short = 'r', long, default_value_t = 1, help = "Row within the shelf (1-3)")]
    pub row: u8,
}

impl From<UpdateBookArgs> for UpdateBook {
    fn from(val: UpdateBookArgs) -> Self {
        UpdateBook {
            isbn: val.isbn,
            title: val.title,
            author: val.author,
            genre: val.genre,
            condition: val.condition.into(),
            shelf_location: val.location.into(),
            shelf_row: val.row,
        }
    }
}

/// Remove a book from the catalog
#[derive(Args)]
pub struct DeleteBookArgs {
    /// ISBN of the book to delete
    pub isbn: String,
}

#[derive(Subcommand)]
pub enum BookCommands {
    /// Add a book to the catalog
    #[command(alias = "a")]
    Add(AddBookArgs),
    /// List books, optionally filtered
    #[command(aliases = ["l", "ls"])]
    List(ListBooksArgs),
    /// Show details of a single book
    #[command(alias = "s")]
    Show(ShowBookArgs),
    /// Update a book's catalog entry
    #[command(alias = "u")]
    Update(UpdateBookArgs),
    /// Remove a book from the catalog
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteBookArgs),
}

// ============================================================================
// Friend commands
// ============================================================================

/// Add a friend to the borrower directory
#[derive(Args)]
pub struct AddFriendArgs {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    #[arg(
        short,
        long,
        default_value_t = 3,
        help = "How many books this friend may have out at once"
    )]
    pub max_loans: i64,
    /// Contact entries as kind=value pairs, e.g. --contact email=sam@example.org
    #[arg(long = "contact", value_name = "KIND=VALUE")]
    pub contacts: Vec<String>,
}

/// Parse a `kind=value` contact argument.
fn parse_contact(raw: &str) -> Result<ContactEntry> {
    let Some((kind, value)) = raw.split_once('=') else {
        bail!("invalid contact '{raw}': expected KIND=VALUE, e.g. email=sam@example.org");
    };
    Ok(ContactEntry {
        kind: kind.to_string(),
        value: value.to_string(),
    })
}

impl AddFriendArgs {
    fn into_params(self) -> Result<CreateFriend> {
        let contacts = self
            .contacts
            .iter()
            .map(|raw| parse_contact(raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(CreateFriend {
            first_name: self.first_name,
            last_name: self.last_name,
            max_loans: self.max_loans,
            contacts,
        })
    }
}

/// Show a friend's details, contacts, and the books they currently hold
#[derive(Args)]
pub struct ShowFriendArgs {
    /// ID of the friend to show
    pub id: u64,
}

impl From<ShowFriendArgs> for Id {
    fn from(val: ShowFriendArgs) -> Self {
        Id { id: val.id }
    }
}

/// Search friends by name
#[derive(Args)]
pub struct SearchFriendsArgs {
    /// Substring to match against first or last name
    pub name: String,
}

/// Update a friend's name or loan quota
#[derive(Args)]
pub struct UpdateFriendArgs {
    /// ID of the friend to update
    pub id: u64,
    /// New first name
    pub first_name: String,
    /// New last name
    pub last_name: String,
    #[arg(short, long, help = "New remaining loan quota")]
    pub max_loans: i64,
}

impl From<UpdateFriendArgs> for UpdateFriend {
    fn from(val: UpdateFriendArgs) -> Self {
        UpdateFriend {
            id: val.id,
            first_name: val.first_name,
            last_name: val.last_name,
            max_loans: val.max_loans,
        }
    }
}

/// Attach a contact entry to an existing friend
#[derive(Args)]
pub struct AddContactArgs {
    /// ID of the friend to attach the contact to
    pub friend_id: u64,
    /// Contact label, e.g. "email" or "phone"
    pub kind: String,
    /// The contact string itself
    pub value: String,
}

impl From<AddContactArgs> for AddContact {
    fn from(val: AddContactArgs) -> Self {
        AddContact {
            friend_id: val.friend_id,
            kind: val.kind,
            value: val.value,
        }
    }
}

/// Remove a single contact entry
#[derive(Args)]
pub struct RemoveContactArgs {
    /// ID of the contact entry to remove
    pub contact_id: u64,
}

impl From<RemoveContactArgs> for Id {
    fn from(val: RemoveContactArgs) -> Self {
        Id { id: val.contact_id }
    }
}

/// Delete a friend and everything attached to them
///
/// Removes the friend's contact entries and open loans along with the friend
/// row. Books they still held go back in stock.
#[derive(Args)]
pub struct DeleteFriendArgs {
    /// ID of the friend to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum FriendCommands {
    /// Add a friend to the borrower directory
    #[command(alias = "a")]
    Add(AddFriendArgs),
    /// List all friends
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a friend's details and current loans
    #[command(alias = "s")]
    Show(ShowFriendArgs),
    /// Search friends by name
    #[command(alias = "f")]
    Search(SearchFriendsArgs),
    /// Update a friend's name or loan quota
    #[command(alias = "u")]
    Update(UpdateFriendArgs),
    /// Attach a contact entry to a friend
    #[command(alias = "c")]
    AddContact(AddContactArgs),
    /// Remove a single contact entry
    RemoveContact(RemoveContactArgs),
    /// Delete a friend, their contacts, and their open loans
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteFriendArgs),
}

// ============================================================================
// Loan commands
// ============================================================================

/// Lend a book to a friend
///
/// The borrow date defaults to today and the due date to two weeks out. The
/// loan is refused when the book is already out or the friend has no
/// remaining quota.
#[derive(Args)]
pub struct CreateLoanArgs {
    /// ISBN of the book to lend
    pub isbn: String,
    /// ID of the borrowing friend
    pub friend_id: u64,
    #[arg(short, long, help = "Borrow date (YYYY-MM-DD), defaults to today")]
    pub borrow_date: Option<Date>,
    #[arg(short, long, help = "Due date (YYYY-MM-DD), defaults to 14 days after borrowing")]
    pub due_date: Option<Date>,
    #[arg(short, long, help = "Date a return reminder should fire (YYYY-MM-DD)")]
    pub reminder_date: Option<Date>,
}

impl CreateLoanArgs {
    fn into_params(self) -> Result<CreateLoan> {
        let borrow_date = self.borrow_date.unwrap_or_else(today);
        let due_date = match self.due_date {
            Some(date) => date,
            None => borrow_date
                .checked_add(jiff::Span::new().days(14))
                .context("Due date out of range")?,
        };
        Ok(CreateLoan {
            friend_id: self.friend_id,
            isbn: self.isbn,
            borrow_date,
            due_date,
            reminder_date: self.reminder_date,
        })
    }
}

/// Record that a friend returned a book
#[derive(Args)]
pub struct ReturnLoanArgs {
    /// ISBN of the returned book
    pub isbn: String,
    /// ID of the friend returning it
    pub friend_id: u64,
}

impl From<ReturnLoanArgs> for ReturnLoan {
    fn from(val: ReturnLoanArgs) -> Self {
        ReturnLoan {
            isbn: val.isbn,
            friend_id: val.friend_id,
        }
    }
}

/// Mark a loan's reminder as handled
#[derive(Args)]
pub struct ClearReminderArgs {
    /// ID of the loan whose reminder was handled
    pub loan_id: u64,
}

impl From<ClearReminderArgs> for Id {
    fn from(val: ClearReminderArgs) -> Self {
        Id { id: val.loan_id }
    }
}

/// List the books currently held by one friend
#[derive(Args)]
pub struct BorrowedArgs {
    /// ID of the friend
    pub friend_id: u64,
}

impl From<BorrowedArgs> for Id {
    fn from(val: BorrowedArgs) -> Self {
        Id { id: val.friend_id }
    }
}

#[derive(Subcommand)]
pub enum LoanCommands {
    /// Lend a book to a friend
    #[command(alias = "c")]
    Create(CreateLoanArgs),
    /// Record that a friend returned a book
    #[command(alias = "r")]
    Return(ReturnLoanArgs),
    /// List all open loans
    #[command(aliases = ["l", "ls"])]
    List,
    /// List overdue loans with borrower contact details
    #[command(alias = "o")]
    Overdue,
    /// List loans whose return reminder falls due today
    Reminders,
    /// Mark a loan's reminder as handled
    ClearReminder(ClearReminderArgs),
    /// List the books currently held by one friend
    #[command(alias = "b")]
    Borrowed(BorrowedArgs),
}

// ============================================================================
// Command handlers
// ============================================================================

/// CLI command dispatcher holding the library handle and output renderer.
pub struct Cli {
    library: Library,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(library: Library, renderer: TerminalRenderer) -> Self {
        Self { library, renderer }
    }

    pub async fn handle_book_command(&self, command: BookCommands) -> Result<()> {
        match command {
            BookCommands::Add(args) => {
                let book = self.library.create_book(&args.into()).await?;
                self.renderer.render(&CreateResult::new(book).to_string())
            }
            BookCommands::List(args) => {
                let filter: BookFilter = args.into();
                let filter = if filter.is_empty() { None } else { Some(filter) };
                let books = self.library.list_books(filter).await?;
                self.renderer.render(&Books(books).to_string())
            }
            BookCommands::Show(args) => {
                match self.library.get_book(&args.isbn).await? {
                    Some(book) => self.renderer.render(&book.to_string()),
                    None => bail!("Book not found: {}", args.isbn),
                }
            }
            BookCommands::Update(args) => {
                let isbn = args.isbn.clone();
                if self.library.update_book(&args.into()).await? {
                    let status = Confirmation::new(format!("Updated book {isbn}"));
                    self.renderer.render(&status.to_string())
                } else {
                    bail!("Book not found: {isbn}")
                }
            }
            BookCommands::Delete(args) => {
                self.library.delete_book(&args.isbn).await?;
                self.renderer
                    .render(&DeleteResult::new("book", args.isbn).to_string())
            }
        }
    }

    pub async fn handle_friend_command(&self, command: FriendCommands) -> Result<()> {
        match command {
            FriendCommands::Add(args) => {
                let friend = self.library.create_friend(&args.into_params()?).await?;
                self.renderer.render(&CreateResult::new(friend).to_string())
            }
            FriendCommands::List => {
                let friends = self.library.list_friends().await?;
                self.renderer.render(&Friends(friends).to_string())
            }
            FriendCommands::Show(args) => {
                let id = args.id;
                match self.library.get_friend(&args.into()).await? {
                    Some(friend) => {
                        let mut output = friend.to_string();
                        let held = self.library.borrowed_books(&Id { id }).await?;
                        if !held.is_empty() {
                            output.push_str("Currently borrowed:\n\n");
                            for book in &held {
                                output.push_str(&book.to_string());
                            }
                        }
                        self.renderer.render(&output)
                    }
                    None => bail!("Friend not found: {id}"),
                }
            }
            FriendCommands::Search(args) => {
                let friends = self.library.search_friends(&args.name).await?;
                self.renderer.render(&Friends(friends).to_string())
            }
            FriendCommands::Update(args) => {
                let id = args.id;
                if self.library.update_friend(&args.into()).await? {
                    let status = Confirmation::new(format!("Updated friend {id}"));
                    self.renderer.render(&status.to_string())
                } else {
                    bail!("Friend not found: {id}")
                }
            }
            FriendCommands::AddContact(args) => {
                let contact = self.library.add_contact(&args.into()).await?;
                self.renderer.render(&CreateResult::new(contact).to_string())
            }
            FriendCommands::RemoveContact(args) => {
                let contact_id = args.contact_id;
                self.library.delete_contact(&args.into()).await?;
                self.renderer
                    .render(&DeleteResult::new("contact", contact_id.to_string()).to_string())
            }
            FriendCommands::Delete(args) => {
                if !args.confirm {
                    bail!(
                        "Deleting a friend also removes their contacts and open loans; \
                         pass --confirm to proceed"
                    );
                }
                self.library.delete_friend(&Id { id: args.id }).await?;
                self.renderer
                    .render(&DeleteResult::new("friend", args.id.to_string()).to_string())
            }
        }
    }

    pub async fn handle_loan_command(&self, command: LoanCommands) -> Result<()> {
        match command {
            LoanCommands::Create(args) => {
                let loan = self.library.create_loan(&args.into_params()?).await?;
                self.renderer.render(&CreateResult::new(loan).to_string())
            }
            LoanCommands::Return(args) => {
                let message = format!(
                    "Returned book {} from friend {}",
                    args.isbn, args.friend_id
                );
                self.library.return_loan(&args.into()).await?;
                self.renderer
                    .render(&Confirmation::new(message).to_string())
            }
            LoanCommands::List => {
                let loans = self.library.list_loans().await?;
                self.renderer.render(&Loans(loans).to_string())
            }
            LoanCommands::Overdue => {
                let overdue = self.library.list_overdue().await?;
                self.renderer.render(&OverdueLoans(overdue).to_string())
            }
            LoanCommands::Reminders => {
                let due = self.library.list_due_reminders().await?;
                self.renderer.render(&OverdueLoans(due).to_string())
            }
            LoanCommands::ClearReminder(args) => {
                let loan_id = args.loan_id;
                self.library.clear_reminder(&args.into()).await?;
                let status =
                    Confirmation::new(format!("Cleared reminder for loan {loan_id}"));
                self.renderer.render(&status.to_string())
            }
            LoanCommands::Borrowed(args) => {
                let held = self.library.borrowed_books(&args.into()).await?;
                if held.is_empty() {
                    self.renderer.render("No books on loan.\n")
                } else {
                    let mut output = String::new();
                    for book in &held {
                        output.push_str(&book.to_string());
                    }
                    self.renderer.render(&output)
                }
            }
        }
    }

    pub async fn show_status(&self) -> Result<()> {
        let stats = self.library.stats().await?;
        self.renderer.render(&stats.to_string())
    }
}
