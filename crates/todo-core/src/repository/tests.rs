//! Repository Integration Tests
//!
//! Tests for MemoryRepository holding todos.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, NewTodo, Todo, TodoId};
    use crate::repository::{MemoryRepository, Repository};

    fn new_todo(text: &str) -> Todo {
        NewTodo::new(text).into_todo(TodoId::new(""))
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = MemoryRepository::<Todo>::new();

        let first = repo.create(&new_todo("First")).await.expect("Failed to create");
        let second = repo.create(&new_todo("Second")).await.expect("Failed to create");

        assert_eq!(first.id, TodoId::new("1"));
        assert_eq!(second.id, TodoId::new("2"));
        assert_eq!(first.text, "First");
        assert!(!first.is_done);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = MemoryRepository::<Todo>::new();

        let created = repo.create(&new_todo("Find me")).await.unwrap();

        let found = repo.find_by_id(&created.id).await.expect("Find failed");
        assert_eq!(found.map(|t| t.text), Some("Find me".to_string()));
        assert!(repo.find_by_id(&TodoId::new("99")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = MemoryRepository::<Todo>::new();

        repo.create(&new_todo("Item 1")).await.unwrap();
        repo.create(&new_todo("Item 2")).await.unwrap();

        let texts: Vec<_> = repo.list().await.unwrap().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["Item 1", "Item 2"]);
    }

    #[tokio::test]
    async fn test_update_todo() {
        let repo = MemoryRepository::<Todo>::new();

        let mut created = repo.create(&new_todo("Original")).await.unwrap();
        created.text = "Updated".to_string();
        created.is_done = true;

        let updated = repo.update(&created).await.expect("Update failed");
        assert_eq!(updated.text, "Updated");
        assert!(updated.is_done);
        assert_eq!(repo.get(&created.id), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = MemoryRepository::<Todo>::new();

        let err = repo.update(&Todo::new("7", "Ghost")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let repo = MemoryRepository::<Todo>::new();

        let created = repo.create(&new_todo("To delete")).await.unwrap();
        repo.delete(&created.id).await.expect("Delete failed");

        assert!(repo.is_empty());
        assert!(matches!(repo.delete(&created.id).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = MemoryRepository::<Todo>::new();

        let first = repo.insert(new_todo("a"));
        repo.delete(&first.id).await.expect("Delete failed");
        let next = repo.insert(new_todo("b"));

        assert_eq!(next.id, TodoId::new("2"));
        assert_eq!(repo.len(), 1);
    }
}
