//! Page templates.
//!
//! Each page is an askama template under `templates/`; values are
//! HTML-escaped on output.

use actix_web::http::StatusCode;
use askama::Template;

use blogly_core::domain::{Post, PostDetail, PostWithAuthor, Tag, TagDetail, User};

/// One checkbox in a multi-select (tags on a post form, posts on a tag form).
#[derive(Debug, Clone)]
pub struct Choice {
    pub id: i32,
    pub label: String,
    pub checked: bool,
}

impl Choice {
    pub fn tags(tags: Vec<Tag>, selected: &[i32]) -> Vec<Choice> {
        tags.into_iter()
            .map(|tag| Choice {
                checked: selected.contains(&tag.id),
                id: tag.id,
                label: tag.name,
            })
            .collect()
    }

    pub fn posts(posts: Vec<PostWithAuthor>, selected: &[i32]) -> Vec<Choice> {
        posts
            .into_iter()
            .map(|item| Choice {
                checked: selected.contains(&item.post.id),
                id: item.post.id,
                label: format!("{} ({})", item.post.title, item.author.full_name()),
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub posts: Vec<PostWithAuthor>,
    pub tags: Vec<Tag>,
}

#[derive(Template)]
#[template(path = "users/list.html")]
pub struct UserListPage {
    pub users: Vec<User>,
}

#[derive(Template)]
#[template(path = "users/detail.html")]
pub struct UserDetailPage {
    pub user: User,
    pub posts: Vec<Post>,
}

/// New and edit user forms share one template.
#[derive(Template)]
#[template(path = "users/form.html")]
pub struct UserFormPage {
    pub heading: String,
    pub action: String,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl UserFormPage {
    pub fn blank() -> Self {
        Self {
            heading: "Create a user".to_string(),
            action: "/users/new".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            image_url: String::new(),
        }
    }

    pub fn edit(user: User) -> Self {
        Self {
            heading: "Edit a user".to_string(),
            action: format!("/users/{}/edit", user.id),
            first_name: user.first_name,
            last_name: user.last_name,
            image_url: user.image_url,
        }
    }
}

#[derive(Template)]
#[template(path = "posts/list.html")]
pub struct PostListPage {
    pub posts: Vec<PostWithAuthor>,
}

#[derive(Template)]
#[template(path = "posts/detail.html")]
pub struct PostDetailPage {
    pub detail: PostDetail,
}

#[derive(Template)]
#[template(path = "posts/form.html")]
pub struct PostFormPage {
    pub heading: String,
    pub action: String,
    pub cancel: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<Choice>,
}

impl PostFormPage {
    pub fn blank(author: &User, tags: Vec<Tag>) -> Self {
        Self {
            heading: format!("Add Post for {}", author.full_name()),
            action: format!("/users/{}/posts/new", author.id),
            cancel: format!("/users/{}", author.id),
            title: String::new(),
            content: String::new(),
            tags: Choice::tags(tags, &[]),
        }
    }

    pub fn edit(detail: PostDetail, tags: Vec<Tag>) -> Self {
        let selected = detail.tag_ids();
        Self {
            heading: "Edit Post".to_string(),
            action: format!("/posts/{}/edit", detail.post.id),
            cancel: format!("/posts/{}", detail.post.id),
            title: detail.post.title,
            content: detail.post.content,
            tags: Choice::tags(tags, &selected),
        }
    }
}

#[derive(Template)]
#[template(path = "tags/list.html")]
pub struct TagListPage {
    pub tags: Vec<Tag>,
}

#[derive(Template)]
#[template(path = "tags/detail.html")]
pub struct TagDetailPage {
    pub detail: TagDetail,
}

#[derive(Template)]
#[template(path = "tags/form.html")]
pub struct TagFormPage {
    pub heading: String,
    pub action: String,
    pub name: String,
    pub posts: Vec<Choice>,
}

impl TagFormPage {
    pub fn blank(posts: Vec<PostWithAuthor>) -> Self {
        Self {
            heading: "Create a tag".to_string(),
            action: "/tags/new".to_string(),
            name: String::new(),
            posts: Choice::posts(posts, &[]),
        }
    }

    pub fn edit(detail: TagDetail, posts: Vec<PostWithAuthor>) -> Self {
        let selected = detail.post_ids();
        Self {
            heading: "Edit a tag".to_string(),
            action: format!("/tags/{}/edit", detail.tag.id),
            name: detail.tag.name,
            posts: Choice::posts(posts, &selected),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub code: u16,
    pub title: String,
    pub detail: Option<String>,
}

impl ErrorPage {
    pub fn new(status: StatusCode, title: &str, detail: Option<&str>) -> Self {
        Self {
            code: status.as_u16(),
            title: title.to_string(),
            detail: detail.map(str::to_owned),
        }
    }
}
