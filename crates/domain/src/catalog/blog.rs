use serde::{Deserialize, Serialize};

use super::user::UserBase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostTranslation {
    pub lang: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content_html: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogTag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A blog post with all translations; localized fields are filled when a
/// language was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub is_published: i32,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub view_count: i64,
    pub slug: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub translations: Vec<BlogPostTranslation>,
    #[serde(default)]
    pub author: Option<UserBase>,
    #[serde(default)]
    pub category: Option<BlogCategory>,
    #[serde(default)]
    pub tags: Vec<BlogTag>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content_html: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

impl BlogPost {
    /// Returns the translation for `lang`, if the post has one.
    #[must_use]
    pub fn translation(&self, lang: &str) -> Option<&BlogPostTranslation> {
        self.translations.iter().find(|t| t.lang == lang)
    }
}

/// The blog list endpoint answers either with a page or a bare array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlogList {
    Paged {
        items: Vec<BlogPost>,
        total: u64,
        page: u32,
        #[serde(rename = "pageSize")]
        page_size: u32,
    },
    Plain(Vec<BlogPost>),
}

impl BlogList {
    /// Returns the posts regardless of shape.
    #[must_use]
    pub fn posts(&self) -> &[BlogPost] {
        match self {
            Self::Paged { items, .. } => items,
            Self::Plain(items) => items,
        }
    }
}

/// Table-of-contents node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogTocItem {
    pub id: i64,
    #[serde(default)]
    pub post_id: Option<i64>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub depth: i32,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub children: Vec<BlogTocItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Box<BlogPost>>,
}

/// Query for the table-of-contents tree. `parent_id` of `-1` means roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogTocQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl Default for BlogTocQuery {
    fn default() -> Self {
        Self { parent_id: Some(-1) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_list_shapes() {
        let paged: BlogList = serde_json::from_str(
            r#"{"items":[{"id":1,"slug":"a"}],"total":1,"page":1,"pageSize":10}"#,
        )
        .unwrap();
        assert_eq!(paged.posts().len(), 1);

        let plain: BlogList = serde_json::from_str(r#"[{"id":1,"slug":"a"},{"id":2,"slug":"b"}]"#).unwrap();
        assert!(matches!(plain, BlogList::Plain(ref posts) if posts.len() == 2));
    }
}
