//! Blog command handlers.

use tabled::Tabled;

use folio_core::model::{BlogPost, EngagementAction, EngagementCounts, EngagementKind};
use folio_core::{BlogQuery, Page, Portfolio, direct_image_url, highlight};

use crate::cli::{BlogArgs, BlogCommand, BlogListArgs, OutputFormat, ReactionArg};
use crate::error::CliError;
use crate::output::{self, RenderOpts, heading};

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Reactions")]
    reactions: String,
}

impl PostRow {
    fn new(p: &BlogPost, terms: &[String], color: bool) -> Self {
        let title = if color {
            highlight(&p.title, terms, output::mark)
        } else {
            p.title.clone()
        };
        Self {
            slug: p.slug.clone(),
            title,
            category: util::or_dash(Some(&p.category)),
            tags: util::truncate(&util::join_or_dash(&p.tags), 32),
            published: published(p),
            reactions: reactions(p.engagement),
        }
    }
}

#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "Name")]
    name: String,
}

fn published(p: &BlogPost) -> String {
    p.published_at().map_or_else(
        || util::or_dash(Some(&p.published_date)),
        |at| at.format("%Y-%m-%d").to_string(),
    )
}

fn reactions(c: EngagementCounts) -> String {
    format!("{} likes, {} claps, {} hearts", c.likes, c.claps, c.hearts)
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(p: &BlogPost, color: bool) -> String {
    let mut lines = vec![
        format!("Title:     {}", heading(&p.title, color)),
        format!("Slug:      {}", p.slug),
        format!("ID:        {}", util::display_id(&p.id)),
        format!("Category:  {}", util::or_dash(Some(&p.category))),
        format!("Tags:      {}", util::join_or_dash(&p.tags)),
        format!("Published: {}", published(p)),
    ];
    if let Some(mins) = p.reading_time {
        lines.push(format!("Reading:   {mins} min"));
    }
    lines.push(format!("Reactions: {}", reactions(p.engagement)));
    if let Some(image) = p.featured_image.as_deref().and_then(direct_image_url) {
        lines.push(format!("Image:     {image}"));
    }
    if !p.excerpt.is_empty() {
        lines.push(String::new());
        lines.push(p.excerpt.clone());
    }
    if !p.content.is_empty() {
        lines.push(String::new());
        lines.push(p.content.clone());
    }
    lines.join("\n")
}

// ── Listing ─────────────────────────────────────────────────────────

/// `--query` first, then each flag applied as the matching transition.
fn listing_query(args: BlogListArgs) -> BlogQuery {
    let mut query = args
        .query
        .as_deref()
        .map(BlogQuery::from_query_string)
        .unwrap_or_default();
    if args.search.is_some() {
        query = query.with_search(args.search);
    }
    if args.category.is_some() {
        query = query.with_category(args.category);
    }
    if args.tag.is_some() {
        query = query.with_tag(args.tag);
    }
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    query
}

fn page_footer(page: &Page<BlogPost>, query: &BlogQuery) -> String {
    if page.total_items == 0 {
        return if query.is_filtered() {
            "No posts match the current filters".into()
        } else {
            "No posts yet".into()
        };
    }
    let mut footer = format!(
        "Page {} of {} ({} posts)",
        page.page, page.total_pages, page.total_items
    );
    if page.has_next() {
        let next = query.with_page(page.page + 1);
        footer.push_str(&format!(
            "\nNext: folio blog list --query '{}'",
            next.to_query_string()
        ));
    }
    footer
}

fn render_page(page: &Page<BlogPost>, query: &BlogQuery, opts: RenderOpts) -> String {
    match opts.format {
        OutputFormat::Table => {
            let terms = query.search_terms();
            let rows: Vec<PostRow> = page
                .items
                .iter()
                .map(|p| PostRow::new(p, &terms, opts.color))
                .collect();
            let footer = page_footer(page, query);
            if rows.is_empty() {
                footer
            } else {
                format!("{}\n{footer}", output::render_table(&rows))
            }
        }
        OutputFormat::Plain => page
            .items
            .iter()
            .map(|p| p.slug.clone())
            .collect::<Vec<_>>()
            .join("\n"),
        format => output::render_single(format, page, |_| String::new(), |_| String::new()),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

fn engagement_kind(arg: ReactionArg) -> EngagementKind {
    match arg {
        ReactionArg::Like => EngagementKind::Liked,
        ReactionArg::Clap => EngagementKind::Clapped,
        ReactionArg::Heart => EngagementKind::Hearted,
    }
}

fn print_names(names: &[String], opts: RenderOpts) {
    let out = output::render_list(
        opts.format,
        names,
        |n| NameRow { name: n.clone() },
        String::clone,
    );
    output::print_output(&out, opts.quiet);
}

pub async fn handle(portfolio: &Portfolio, args: BlogArgs, opts: RenderOpts) -> Result<(), CliError> {
    match args.command {
        BlogCommand::List(list) => {
            let query = listing_query(list);
            tracing::debug!(query = %query.to_query_string(), "listing blog posts");
            let page = portfolio.blog_page(&query).await?;
            output::print_output(&render_page(&page, &query, opts), opts.quiet);
            Ok(())
        }

        BlogCommand::Show { slug } => {
            let post = portfolio.blog_post(&slug).await?;
            let out = output::render_single(
                opts.format,
                &post,
                |p| detail(p, opts.color),
                |p| p.slug.clone(),
            );
            output::print_output(&out, opts.quiet);
            Ok(())
        }

        BlogCommand::Categories => {
            print_names(&portfolio.blog_categories().await?, opts);
            Ok(())
        }

        BlogCommand::Tags => {
            print_names(&portfolio.blog_tags().await?, opts);
            Ok(())
        }

        BlogCommand::Engage {
            post_id,
            reaction,
            remove,
        } => {
            let action = if remove {
                EngagementAction::Remove
            } else {
                EngagementAction::Add
            };
            let counts = portfolio
                .engage(&post_id, engagement_kind(reaction), action)
                .await?;
            let out = output::render_single(
                opts.format,
                &counts,
                |c| {
                    [
                        format!("Likes:  {}", c.likes),
                        format!("Claps:  {}", c.claps),
                        format!("Hearts: {}", c.hearts),
                    ]
                    .join("\n")
                },
                |c| format!("{} {} {}", c.likes, c.claps, c.hearts),
            );
            output::print_output(&out, opts.quiet);
            Ok(())
        }
    }
}
