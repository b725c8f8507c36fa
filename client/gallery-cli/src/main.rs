use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gallery_cli::flow::{Post, PostComposer};
use gallery_cli::prompts;

#[derive(Parser)]
#[command(
    name = "gallery-cli",
    about = "Generate images from prompts and share them with the community gallery"
)]
struct Cli {
    /// Base URL of the gallery service
    #[arg(long, global = true, default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an image and share it with the community
    Create {
        /// Display name attached to the post
        #[arg(long)]
        name: String,

        /// Text prompt for the image
        #[arg(long)]
        prompt: Option<String>,

        /// Pick a random prompt instead of supplying one
        #[arg(long)]
        surprise_me: bool,

        /// Directory for the generated preview image
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Generate and preview only; do not publish
        #[arg(long)]
        skip_share: bool,
    },
    /// List the community gallery
    Gallery,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Create {
            name,
            prompt,
            surprise_me,
            out,
            skip_share,
        } => {
            let mut composer = PostComposer::new(cli.api_url, out);
            composer.form.name = name;
            composer.form.prompt = match (prompt, surprise_me) {
                (_, true) => prompts::random_prompt("").to_string(),
                (Some(prompt), false) => prompt,
                (None, false) => anyhow::bail!("Please enter a prompt."),
            };

            println!("Prompt: {}", composer.form.prompt);

            println!("Generating...");
            let path = composer.generate_image().await?;
            println!("Image saved to {}", path.display());

            if !skip_share {
                println!("Sharing...");
                composer.share().await?;
                println!("Shared with the community.");

                let posts = composer.fetch_gallery().await?;
                render_gallery(&posts);
            }
        }
        Command::Gallery => {
            let composer = PostComposer::new(cli.api_url, std::env::temp_dir());
            let posts = composer.fetch_gallery().await?;
            render_gallery(&posts);
        }
    }

    Ok(())
}

fn render_gallery(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts found");
        return;
    }

    println!("Community showcase ({} posts):", posts.len());
    for post in posts {
        println!("  {} — \"{}\"", post.name, post.prompt);
        println!("    {}", post.photo);
    }
}
