use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use xen_client::models::{
    ContactMessage, NewTicket, NewsletterSubscription, Post, TicketCategory, TicketPriority,
};
use xen_client::{XenClient, BASE_URL_ENV, DEFAULT_BASE_URL};
use xen_pages::blog_list::BlogListMsg;
use xen_pages::{
    BlogDetailController, BlogListController, Phase, PricingController, SupportController,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides XEN_API_URL)
    #[arg(short, long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the blog listing
    Blog {
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        tag: Option<String>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Show a single post with related articles
    Post {
        slug: String,

        /// Like the post after loading it
        #[arg(long)]
        like: bool,
    },

    /// Show pricing plans, add-ons and FAQs
    Pricing,

    /// Browse the support knowledge base
    Support {
        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Subscribe to the newsletter
    Subscribe {
        email: String,

        #[arg(short, long, default_value = "")]
        name: String,
    },

    /// Unsubscribe from the newsletter
    Unsubscribe { email: String },

    /// Create a support ticket
    Ticket {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long, default_value = "general")]
        category: TicketCategory,

        #[arg(long, default_value = "medium")]
        priority: TicketPriority,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Send a contact-form message
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "general")]
        subject: String,

        #[arg(long)]
        message: String,
    },
}

fn init_logging() {
    let fmt_layer = fmt::layer().with_target(true);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,xen_client=info,xen_pages=info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let base_url = cli
        .server
        .or_else(|| std::env::var(BASE_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    tracing::debug!(%base_url, "resolved backend address");
    println!("🔌 Connecting to: {}", base_url);
    let client = XenClient::new(base_url);

    match cli.command {
        Commands::Blog {
            page,
            category,
            tag,
            search,
        } => {
            let mut ctrl = BlogListController::new();
            if let Some(category) = category {
                ctrl.dispatch(BlogListMsg::SelectCategory(category));
            }
            if let Some(tag) = tag {
                ctrl.dispatch(BlogListMsg::SelectTag(tag));
            }
            if let Some(search) = search {
                ctrl.dispatch(BlogListMsg::SubmitSearch(search));
            }
            // Первая загрузка; затем переход на нужную страницу
            if let Some(cmd) = ctrl.dispatch(BlogListMsg::Load) {
                ctrl.run(cmd, &client).await;
            }
            if page > 1 {
                if let Some(cmd) = ctrl.dispatch(BlogListMsg::GoToPage(page)) {
                    ctrl.run(cmd, &client).await;
                }
            }

            let state = ctrl.snapshot();
            if state.phase == Phase::Error {
                println!(
                    "❌ {}",
                    state.error.as_deref().unwrap_or("Failed to load blog posts")
                );
                std::process::exit(1);
            }

            if state.featured_visible() {
                println!("\n⭐ Featured articles:");
                for post in state.featured.iter().take(3) {
                    print_post_line(post);
                }
            }

            println!(
                "\n📋 {} article{} (page {} of {})",
                state.posts.len(),
                if state.posts.len() == 1 { "" } else { "s" },
                state.page,
                state.total_pages
            );
            if state.posts.is_empty() {
                println!("   No articles found. Try adjusting your search terms or filters.");
            }
            for post in &state.posts {
                print_post_line(post);
            }

            if !state.categories.is_empty() {
                let names: Vec<&str> =
                    state.categories.iter().map(|c| c.slug.as_str()).collect();
                println!("\n🏷️  Categories: {}", names.join(", "));
            }
            if !state.tags.is_empty() {
                let names: Vec<&str> = state.tags.iter().map(|t| t.slug.as_str()).collect();
                println!("🏷️  Tags: {}", names.join(", "));
            }
        }

        Commands::Post { slug, like } => {
            println!("🔍 Loading post: {}", slug);

            let mut ctrl = BlogDetailController::new();
            ctrl.load(&client, &slug).await;

            if ctrl.snapshot().phase == Phase::Error {
                println!(
                    "❌ {}",
                    ctrl.snapshot()
                        .error
                        .as_deref()
                        .unwrap_or("Blog post not found")
                );
                std::process::exit(1);
            }

            if like {
                ctrl.like(&client).await;
                println!("❤️  Liked!");
            }

            let state = ctrl.snapshot();
            if let Some(post) = &state.post {
                println!("\n✅ {}", post.title);
                if let Some(name) = post.category.as_ref().map(|c| c.name.as_str()) {
                    println!("   Category: {}", name);
                }
                println!("   Author: {}", post.author_name);
                if let Some(published) = post.published_at {
                    println!("   Published: {}", published.format("%Y-%m-%d"));
                }
                println!(
                    "   {} min read · {} views · {} comments · {} likes",
                    post.reading_time, post.view_count, post.comment_count, post.like_count
                );
                if !post.excerpt.is_empty() {
                    println!("\n   {}", post.excerpt);
                }
            }

            if !state.related.is_empty() {
                println!("\n📎 Related articles:");
                for post in &state.related {
                    print_post_line(post);
                }
            }
        }

        Commands::Pricing => {
            println!("💰 Loading pricing information...");

            let mut ctrl = PricingController::new();
            ctrl.load(&client).await;

            let state = ctrl.snapshot();
            if state.phase == Phase::Error {
                println!(
                    "❌ {}",
                    state
                        .error
                        .as_deref()
                        .unwrap_or("Failed to load pricing information")
                );
                std::process::exit(1);
            }

            if state.summary.is_empty() {
                println!("   Pricing is being set up. Please check back soon.");
                return Ok(());
            }

            println!("\n✅ Plans:");
            for plan in ctrl.sorted_plans() {
                if plan.is_contact_pricing() {
                    println!("   {} ({}) — contact sales", plan.name, plan.user_range);
                } else {
                    println!(
                        "   {} ({}) — Tk. {:.2}/month, Tk. {:.2}/year{}",
                        plan.name,
                        plan.user_range,
                        plan.monthly_price,
                        plan.annual_price,
                        if plan.is_popular { "  ⭐ popular" } else { "" }
                    );
                }
            }

            if !state.summary.addons.is_empty() {
                println!("\n➕ Add-ons:");
                for addon in &state.summary.addons {
                    if addon.is_discussion {
                        println!("   {} — contact sales", addon.name);
                    } else {
                        println!(
                            "   {} — Tk. {:.2}/{}",
                            addon.name, addon.price, addon.price_unit
                        );
                    }
                }
            }

            if !state.summary.faqs.is_empty() {
                println!("\n❓ FAQ:");
                for faq in &state.summary.faqs {
                    println!("   Q: {}", faq.question);
                    println!("   A: {}\n", faq.answer);
                }
            }
        }

        Commands::Support { category, search } => {
            println!("🛟 Loading support articles...");

            let mut ctrl = SupportController::new();
            ctrl.load(&client).await;

            if ctrl.snapshot().phase == Phase::Error {
                println!(
                    "❌ {}",
                    ctrl.snapshot()
                        .error
                        .as_deref()
                        .unwrap_or("Failed to load support information")
                );
                std::process::exit(1);
            }

            if let Some(category) = category {
                ctrl.set_category(category);
            }
            if let Some(search) = search {
                ctrl.set_search(search);
            }

            let articles = ctrl.visible_articles();
            println!("\n📚 {} article{} found", articles.len(), if articles.len() == 1 { "" } else { "s" });
            for article in articles {
                println!(
                    "   [{}] {}{}",
                    article.category,
                    article.title,
                    if article.is_featured { "  ⭐" } else { "" }
                );
                if !article.excerpt.is_empty() {
                    println!("      {}", article.excerpt);
                }
            }

            let state = ctrl.snapshot();
            if !state.categories.is_empty() {
                println!("\n🏷️  Categories: {}", state.categories.join(", "));
            }
        }

        Commands::Subscribe { email, name } => {
            println!("📧 Subscribing {}...", email);

            let subscription = NewsletterSubscription { email, name };
            match client.blog().subscribe(&subscription).await {
                Ok(()) => println!("✅ Thank you for subscribing to our newsletter!"),
                Err(e) => {
                    println!("❌ Failed to subscribe: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Unsubscribe { email } => {
            println!("📧 Unsubscribing {}...", email);

            match client.blog().unsubscribe(&email).await {
                Ok(()) => println!("✅ Unsubscribed"),
                Err(e) => {
                    println!("❌ Failed to unsubscribe: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Ticket {
            title,
            description,
            category,
            priority,
            name,
            email,
            company,
            phone,
        } => {
            println!("🎫 Creating support ticket...");

            let ticket = NewTicket {
                title,
                description,
                category,
                priority,
                name,
                email,
                company,
                phone,
            };

            let ctrl = SupportController::new();
            match ctrl.submit_ticket(&client, &ticket).await {
                Ok(created) => {
                    println!("✅ Support ticket created!");
                    println!("   ID: {}", created.id);
                    println!("   Title: {}", created.title);
                    if !created.status.is_empty() {
                        println!("   Status: {}", created.status);
                    }
                }
                Err(e) => {
                    println!("❌ Failed to create support ticket: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            println!("✉️  Sending message...");

            let message = ContactMessage {
                name,
                email,
                company: String::new(),
                phone: String::new(),
                subject,
                message,
            };

            let ctrl = SupportController::new();
            match ctrl.submit_contact(&client, &message).await {
                Ok(()) => println!("✅ Thank you for your message! We'll get back to you soon."),
                Err(e) => {
                    println!("❌ Failed to send message: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn print_post_line(post: &Post) {
    let date = post
        .published_at
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "   [{}] {} — {} ({} min, ❤️ {})",
        date, post.title, post.author_name, post.reading_time, post.like_count
    );
}
