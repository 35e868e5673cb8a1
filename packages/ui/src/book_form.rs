//! Edit form state for a single book.

use api::Book;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Author is required")]
    MissingAuthor,
}

/// Keys that commit the category input box as a tag.
pub fn is_category_commit_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Editable copy of a [`Book`]. Changes stay local until [`BookForm::apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_url: String,
    pub categories: Vec<String>,
    pub category_input: String,
}

impl BookForm {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone().unwrap_or_default(),
            cover_url: book.cover_url.clone().unwrap_or_default(),
            categories: book.categories.clone(),
            category_input: String::new(),
        }
    }

    /// Add a category tag. Blank input and case-insensitive duplicates are
    /// ignored. Returns whether the tag was added.
    pub fn add_category(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        let lower = value.to_lowercase();
        if self.categories.iter().any(|c| c.to_lowercase() == lower) {
            return false;
        }
        self.categories.push(value.to_string());
        true
    }

    /// Turn the input box into a tag and clear it.
    pub fn commit_category_input(&mut self) {
        let input = std::mem::take(&mut self.category_input);
        self.add_category(&input);
    }

    pub fn remove_category(&mut self, value: &str) {
        self.categories.retain(|c| c != value);
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.author.trim().is_empty() {
            return Err(FormError::MissingAuthor);
        }
        Ok(())
    }

    /// The edited book. Id, owner and publication date carry over from `original`.
    pub fn apply(&self, original: &Book) -> Result<Book, FormError> {
        self.validate()?;
        Ok(Book {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            description: non_blank(&self.description),
            cover_url: non_blank(&self.cover_url),
            categories: self.categories.clone(),
            ..original.clone()
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
