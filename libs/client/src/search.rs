//! Client-side post search
//!
//! A pure filter over an already-fetched post list; it only ever searches
//! what the client has loaded, never the server.

use crate::models::Post;

/// Case-insensitive substring match against title, content, or author
/// username. An empty term matches everything, so clearing the search box
/// restores the full list.
pub fn filter_posts<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    if term.is_empty() {
        return posts.iter().collect();
    }

    let needle = term.to_lowercase();

    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.content.to_lowercase().contains(&needle)
                || post.author_username.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn post(title: &str, content: &str, author: &str) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            author_id: Uuid::new_v4(),
            author_username: author.to_string(),
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post("Rust tips", "Borrow checker notes", "alice"),
            post("Weekend plans", "Going hiking", "bob"),
            post("Hiking gear", "Boots and RUST-proof flasks", "carol"),
        ]
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let posts = sample();
        assert_eq!(filter_posts(&posts, "").len(), posts.len());
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        let posts = sample();
        let hits = filter_posts(&posts, "rust");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().any(|p| p.title == "Rust tips"));
        assert!(hits.iter().any(|p| p.title == "Hiking gear"));
    }

    #[test]
    fn test_matches_content_and_author() {
        let posts = sample();
        assert_eq!(filter_posts(&posts, "borrow")[0].author_username, "alice");
        assert_eq!(filter_posts(&posts, "BOB")[0].title, "Weekend plans");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let posts = sample();
        assert!(filter_posts(&posts, "quantum").is_empty());
    }

    #[test]
    fn test_filter_is_restartable() {
        let posts = sample();
        let narrowed = filter_posts(&posts, "hiking");
        assert_eq!(narrowed.len(), 2);

        // The source list is untouched, so a new term starts from scratch
        let widened = filter_posts(&posts, "");
        assert_eq!(widened.len(), posts.len());
    }
}
