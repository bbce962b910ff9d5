//! Mediary CLI — command-line client for a federated media catalog.
//!
//! Set MEDIARY_API_URL and, for member operations, MEDIARY_TOKEN (JWT) and
//! MEDIARY_CSRF_TOKEN.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mediary_cli::{init_tracing, kind_summary};
use mediary_client::ApiClient;
use mediary_core::models::{FollowRequest, FollowRequestKind};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "mediary", about = "Mediary catalog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a random batch of media, classified by kind
    Random {
        /// Group the output by kind instead of response order
        #[arg(long)]
        buckets: bool,
    },
    /// Get a single media record by ID
    Get {
        /// Media UUID
        id: Uuid,
    },
    /// Search the catalog
    Search {
        /// Search query
        query: String,
        /// Maximum number of results
        #[arg(long, default_value = "20")]
        limit: Option<u32>,
    },
    /// Look up a member profile
    Member {
        /// Member name or webfinger
        name: String,
    },
    /// Follow a member
    Follow {
        /// Webfinger of the member to follow
        target: String,
        /// Include their reblogs in your feed
        #[arg(long)]
        reblogs: bool,
        /// Notify on new activity
        #[arg(long)]
        notify: bool,
    },
    /// Unfollow a member
    Unfollow {
        /// Webfinger of the member to unfollow
        target: String,
    },
    /// Show the follow relation toward a member
    Status {
        /// Webfinger of the followee
        target: String,
    },
    /// List pending follow requests
    Requests {
        /// Which list: sent, received, or all
        #[arg(default_value = "all")]
        kind: FollowRequestKindArg,
    },
    /// Accept an incoming follow request by id
    Accept { id: i64 },
    /// Reject an incoming follow request by id
    Reject { id: i64 },
    /// Cancel a follow request you sent
    Cancel { id: i64 },
    /// Block a member
    Block {
        /// Your webfinger
        blocker: String,
        /// Webfinger of the member to block
        blockee: String,
    },
    /// Unblock a member
    Unblock {
        /// Your webfinger
        blocker: String,
        /// Webfinger of the member to unblock
        blockee: String,
    },
    /// List members a viewer follows
    Followees {
        /// Viewer webfinger
        viewer: String,
    },
}

#[derive(Clone, Copy)]
struct FollowRequestKindArg(FollowRequestKind);

impl std::str::FromStr for FollowRequestKindArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse().map(FollowRequestKindArg)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let client = ApiClient::from_env()?;

    match cli.command {
        Commands::Random { buckets } => {
            let batch = client.random_media().await?;
            eprintln!("{} records ({})", batch.len(), kind_summary(&batch.kinds()));
            if buckets {
                print_json(&batch.into_buckets())?;
            } else {
                print_json(&batch.records)?;
            }
        }
        Commands::Get { id } => {
            let record = client.media_by_id(id).await?;
            print_json(&record)?;
        }
        Commands::Search { query, limit } => {
            let response = client.search(&query, limit).await?;
            eprintln!("{} results", response.count);
            print_json(&response.results)?;
        }
        Commands::Member { name } => {
            let member = client.member_info(&name).await?;
            print_json(&member)?;
        }
        Commands::Follow {
            target,
            reblogs,
            notify,
        } => {
            let response = client
                .follow(&FollowRequest {
                    target,
                    reblogs,
                    notify,
                })
                .await?;
            println!("{}", response.status);
        }
        Commands::Unfollow { target } => {
            let response = client.unfollow(&target).await?;
            println!("{}", response.status);
        }
        Commands::Status { target } => {
            let response = client.follow_status(&target).await?;
            println!("{}", response.status);
        }
        Commands::Requests { kind } => match client.follow_requests(kind.0).await? {
            mediary_client::FollowRequestList::Grouped(group) => print_json(&group)?,
            mediary_client::FollowRequestList::Flat(list) => print_json(&list)?,
        },
        Commands::Accept { id } => {
            client.accept_follow_request(id).await?;
            println!("accepted");
        }
        Commands::Reject { id } => {
            client.reject_follow_request(id).await?;
            println!("rejected");
        }
        Commands::Cancel { id } => {
            client.cancel_follow_request(id).await?;
            println!("cancelled");
        }
        Commands::Block { blocker, blockee } => {
            client.block(&blocker, &blockee).await?;
            println!("blocked");
        }
        Commands::Unblock { blocker, blockee } => {
            client.unblock(&blocker, &blockee).await?;
            println!("unblocked");
        }
        Commands::Followees { viewer } => {
            let members = client.list_followees(&viewer).await?;
            print_json(&members)?;
        }
    }

    Ok(())
}
