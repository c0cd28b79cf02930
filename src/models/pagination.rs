use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Metadatos de paginación tal como los envía el servidor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    /// Tamaño de página (no el número de elementos recibidos)
    pub current_page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

/// Colección paginada: se recalcula entera en cada fetch
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Página vacía (vista degradada tras un fetch fallido)
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination {
                current_page: 1,
                current_page_size: 0,
                total_items: 0,
                total_pages: 0,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Invariantes: items <= tamaño de página, página actual dentro de [1, total_pages]
    pub fn check(&self) -> Result<(), ApiError> {
        let p = &self.pagination;
        if self.items.len() as u64 > u64::from(p.current_page_size) {
            return Err(ApiError::decode(format!(
                "page holds {} items but page size is {}",
                self.items.len(),
                p.current_page_size
            )));
        }
        if p.total_items > 0 && (p.current_page < 1 || p.current_page > p.total_pages) {
            return Err(ApiError::decode(format!(
                "current page {} outside [1, {}]",
                p.current_page, p.total_pages
            )));
        }
        Ok(())
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: usize, current: u32, size: u32, total: u64, pages: u32) -> Page<usize> {
        Page {
            items: (0..items).collect(),
            pagination: Pagination {
                current_page: current,
                current_page_size: size,
                total_items: total,
                total_pages: pages,
            },
        }
    }

    #[test]
    fn last_partial_page_is_valid() {
        assert!(page(1, 2, 25, 26, 2).check().is_ok());
        assert!(Page::<usize>::empty().check().is_ok());
    }

    #[test]
    fn oversized_page_is_rejected() {
        assert!(matches!(page(26, 1, 25, 26, 2).check(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn current_page_out_of_range_is_rejected() {
        assert!(page(1, 3, 25, 30, 2).check().is_err());
        assert!(page(0, 0, 25, 30, 2).check().is_err());
    }

    #[test]
    fn pagination_decodes_camel_case() {
        let json = r#"{"currentPage":2,"currentPageSize":25,"totalItems":30,"totalPages":2}"#;
        let p: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(p.current_page, 2);
        assert_eq!(p.total_items, 30);
    }
}
