// ── Blog listing engine ──
//
// Query-string state for the blog listing (`page`, `category`, `tag`,
// `search`), the transitions the sidebar performs on it, newest-first
// filtering, pagination and search-term highlighting.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::filter::matches_search;
use crate::model::BlogPost;

/// Posts per listing page.
pub const DEFAULT_PER_PAGE: usize = 9;

// ── Query state ──────────────────────────────────────────────────────

/// The blog listing's filter and page, as carried in the URL query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogQuery {
    /// 1-based page number.
    pub page: usize,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self {
            page: 1,
            category: None,
            tag: None,
            search: None,
        }
    }
}

/// Empty strings mean "unset".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl BlogQuery {
    /// Parse `page=2&category=Cloud&tag=aws&search=iam`. A leading `?` is
    /// accepted. Unknown keys are ignored; a missing, zero or unparseable
    /// page is page 1.
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut query = Self::default();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "page" => {
                    query.page = value.trim().parse().ok().filter(|p| *p > 0).unwrap_or(1);
                }
                "category" => query.category = non_empty(Some(value.into_owned())),
                "tag" => query.tag = non_empty(Some(value.into_owned())),
                "search" => query.search = non_empty(Some(value.into_owned())),
                _ => {}
            }
        }
        query
    }

    /// Render back to a query string without the leading `?`. Page 1 and
    /// unset fields are omitted.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if self.page > 1 {
            out.append_pair("page", &self.page.to_string());
        }
        if let Some(category) = &self.category {
            out.append_pair("category", category);
        }
        if let Some(tag) = &self.tag {
            out.append_pair("tag", tag);
        }
        if let Some(search) = &self.search {
            out.append_pair("search", search);
        }
        out.finish()
    }

    /// `true` when any of category, tag or search is set.
    pub fn is_filtered(&self) -> bool {
        self.category.is_some() || self.tag.is_some() || self.search.is_some()
    }

    /// Lowercased search terms.
    pub fn search_terms(&self) -> Vec<String> {
        self.search
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Set or clear the search, back to page 1.
    #[must_use]
    pub fn with_search(&self, search: Option<String>) -> Self {
        Self {
            page: 1,
            search: non_empty(search),
            ..self.clone()
        }
    }

    /// Set or clear the category, back to page 1. Selecting a category
    /// drops the tag.
    #[must_use]
    pub fn with_category(&self, category: Option<String>) -> Self {
        Self {
            page: 1,
            category: non_empty(category),
            tag: None,
            ..self.clone()
        }
    }

    /// Set or clear the tag, back to page 1. Selecting a tag drops the
    /// category.
    #[must_use]
    pub fn with_tag(&self, tag: Option<String>) -> Self {
        Self {
            page: 1,
            tag: non_empty(tag),
            category: None,
            ..self.clone()
        }
    }

    /// Select `category`, or clear it if it is already the active one.
    #[must_use]
    pub fn toggle_category(&self, category: &str) -> Self {
        if is_active(self.category.as_deref(), category) {
            self.with_category(None)
        } else {
            self.with_category(Some(category.to_owned()))
        }
    }

    /// Select `tag`, or clear it if it is already the active one.
    #[must_use]
    pub fn toggle_tag(&self, tag: &str) -> Self {
        if is_active(self.tag.as_deref(), tag) {
            self.with_tag(None)
        } else {
            self.with_tag(Some(tag.to_owned()))
        }
    }

    #[must_use]
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Drop every filter and go back to page 1.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::default()
    }
}

fn is_active(current: Option<&str>, candidate: &str) -> bool {
    current.is_some_and(|c| c.eq_ignore_ascii_case(candidate))
}

// ── Filtering ────────────────────────────────────────────────────────

/// Newest first; posts whose date cannot be read go last, keeping their
/// relative order.
fn newest_first(a: Option<&DateTime<Utc>>, b: Option<&DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Posts visible under `query`, newest first.
///
/// Category is a case-insensitive equality match, tag a case-insensitive
/// membership match, search requires every term somewhere in title,
/// excerpt, content, category or tags.
pub fn filter_posts<'a>(posts: &'a [BlogPost], query: &BlogQuery) -> Vec<&'a BlogPost> {
    let mut dated: Vec<_> = posts.iter().map(|p| (p.published_at(), p)).collect();
    dated.sort_by(|(a, _), (b, _)| newest_first(a.as_ref(), b.as_ref()));

    let terms = query.search_terms();
    dated
        .into_iter()
        .map(|(_, post)| post)
        .filter(|post| {
            query
                .category
                .as_deref()
                .is_none_or(|c| post.category.to_lowercase() == c.to_lowercase())
        })
        .filter(|post| {
            query.tag.as_deref().is_none_or(|tag| {
                let tag = tag.to_lowercase();
                post.tags.iter().any(|t| t.to_lowercase() == tag)
            })
        })
        .filter(|post| matches_search(*post, &terms))
        .collect()
}

// ── Pagination ───────────────────────────────────────────────────────

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

/// Slice `items` into page `page` (1-based) of `per_page` entries.
///
/// A page past the end is empty; page 0 is treated as page 1 and a zero
/// page size as 1.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page);

    let items = items.into_iter().skip(start).take(per_page).collect();
    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}

// ── Highlighting ─────────────────────────────────────────────────────

/// Wrap every case-insensitive occurrence of any term with `mark`.
///
/// Terms are matched literally; overlapping terms prefer the longest.
pub fn highlight(text: &str, terms: &[String], mut mark: impl FnMut(&str) -> String) -> String {
    let mut terms: Vec<&str> = terms
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect();
    if terms.is_empty() {
        return text.to_owned();
    }
    terms.sort_by_key(|t| std::cmp::Reverse(t.len()));
    terms.dedup();

    let pattern = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
        return text.to_owned();
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in re.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        out.push_str(&mark(m.as_str()));
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn post(id: u64, title: &str, category: &str, tags: &[&str], date: &str) -> BlogPost {
        serde_json::from_value(json!({
            "id": id,
            "slug": format!("post-{id}"),
            "title": title,
            "excerpt": format!("{title} excerpt"),
            "content": "body",
            "category": category,
            "tags": tags,
            "publishedDate": date
        }))
        .unwrap()
    }

    fn posts() -> Vec<BlogPost> {
        vec![
            post(1, "Intro to Rust", "Programming", &["rust"], "2024-01-10"),
            post(2, "AWS IAM Pitfalls", "Cloud", &["aws", "security"], "2024-03-05"),
            post(3, "Undated Notes", "Programming", &["misc"], "someday"),
            post(4, "Securing S3", "Cloud", &["AWS"], "2024-02-20T08:00:00Z"),
        ]
    }

    fn ids(result: &[&BlogPost]) -> Vec<String> {
        result.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn query_string_round_trip() {
        let q = BlogQuery::from_query_string("?page=2&category=Cloud%20Computing&search=iam+roles");
        assert_eq!(q.page, 2);
        assert_eq!(q.category.as_deref(), Some("Cloud Computing"));
        assert_eq!(q.search.as_deref(), Some("iam roles"));
        assert_eq!(BlogQuery::from_query_string(&q.to_query_string()), q);
    }

    #[test]
    fn bad_page_defaults_to_one_and_is_omitted() {
        for raw in ["page=abc", "page=0", "page=-3", ""] {
            let q = BlogQuery::from_query_string(raw);
            assert_eq!(q.page, 1, "{raw}");
            assert_eq!(q.to_query_string(), "");
        }
    }

    #[test]
    fn empty_values_are_unset() {
        let q = BlogQuery::from_query_string("tag=&search=%20");
        assert!(!q.is_filtered());
    }

    #[test]
    fn category_and_tag_are_mutually_exclusive() {
        let q = BlogQuery::default()
            .with_page(3)
            .with_tag(Some("aws".into()))
            .with_category(Some("Cloud".into()));
        assert_eq!(q.tag, None);
        assert_eq!(q.category.as_deref(), Some("Cloud"));
        assert_eq!(q.page, 1);

        let q = q.with_tag(Some("rust".into()));
        assert_eq!(q.category, None);
        assert_eq!(q.tag.as_deref(), Some("rust"));
    }

    #[test]
    fn search_resets_page_but_keeps_category() {
        let q = BlogQuery::default()
            .with_category(Some("Cloud".into()))
            .with_page(2)
            .with_search(Some("iam".into()));
        assert_eq!(q.page, 1);
        assert_eq!(q.category.as_deref(), Some("Cloud"));
        assert_eq!(q.with_search(None).search, None);
    }

    #[test]
    fn toggling_the_active_value_clears_it() {
        let q = BlogQuery::default().toggle_category("Cloud");
        assert_eq!(q.category.as_deref(), Some("Cloud"));
        assert_eq!(q.toggle_category("cloud").category, None);
        assert_eq!(q.toggle_tag("aws").toggle_tag("aws").tag, None);
    }

    #[test]
    fn cleared_drops_everything() {
        let q = BlogQuery::from_query_string("page=4&tag=x&search=y").cleared();
        assert_eq!(q, BlogQuery::default());
    }

    #[test]
    fn posts_sorted_newest_first_with_undated_last() {
        let all = posts();
        let result = filter_posts(&all, &BlogQuery::default());
        assert_eq!(ids(&result), vec!["post-2", "post-4", "post-1", "post-3"]);
    }

    #[test]
    fn category_is_case_insensitive() {
        let all = posts();
        let q = BlogQuery::default().with_category(Some("cloud".into()));
        assert_eq!(ids(&filter_posts(&all, &q)), vec!["post-2", "post-4"]);
    }

    #[test]
    fn tag_membership_is_case_insensitive() {
        let all = posts();
        let q = BlogQuery::default().with_tag(Some("aws".into()));
        assert_eq!(ids(&filter_posts(&all, &q)), vec!["post-2", "post-4"]);
    }

    #[test]
    fn search_terms_must_all_match() {
        let all = posts();
        let q = BlogQuery::default().with_search(Some("aws security".into()));
        assert_eq!(ids(&filter_posts(&all, &q)), vec!["post-2"]);
    }

    #[test]
    fn pagination_bounds() {
        let items: Vec<u32> = (1..=20).collect();

        let first = paginate(items.clone(), 1, DEFAULT_PER_PAGE);
        assert_eq!(first.items, (1..=9).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = paginate(items.clone(), 3, DEFAULT_PER_PAGE);
        assert_eq!(last.items, vec![19, 20]);
        assert!(!last.has_next());

        let past = paginate(items, 7, DEFAULT_PER_PAGE);
        assert!(past.items.is_empty());
        assert_eq!(past.total_items, 20);
    }

    #[test]
    fn pagination_of_nothing_has_zero_pages() {
        let page = paginate(Vec::<u32>::new(), 1, DEFAULT_PER_PAGE);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn highlight_marks_every_term() {
        let out = highlight(
            "Cloud security for the cloud",
            &["cloud".into(), "security".into()],
            |m| format!("[{m}]"),
        );
        assert_eq!(out, "[Cloud] [security] for the [cloud]");
    }

    #[test]
    fn highlight_escapes_regex_metacharacters() {
        let out = highlight("C++ and C#", &["c++".into()], |m| format!("<{m}>"));
        assert_eq!(out, "<C++> and C#");
    }

    #[test]
    fn highlight_without_terms_is_identity() {
        assert_eq!(highlight("plain", &[], |m| m.to_uppercase()), "plain");
    }
}
