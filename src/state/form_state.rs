// ============================================================================
// FORM STATE - Formularios de alta/edición
// ============================================================================

use crate::error::ApiError;

/// Campos editables + bloqueo de envío + error del servidor.
/// En error los campos se conservan para corregirlos.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<F> {
    pub fields: F,
    submitting: bool,
    error: Option<String>,
}

impl<F> FormState<F> {
    pub fn new(fields: F) -> Self {
        Self {
            fields,
            submitting: false,
            error: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Edición de campos (no se permite mientras se envía)
    pub fn edit(&mut self, change: impl FnOnce(&mut F)) {
        if !self.submitting {
            change(&mut self.fields);
        }
    }

    /// `false` si ya hay un envío en curso
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn fail_submit(&mut self, error: &ApiError) {
        self.submitting = false;
        if !error.is_cancelled() {
            log::error!("❌ Envío fallido: {}", error);
            self.error = Some(error.user_message());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiscountCodeForm;

    #[test]
    fn failed_submit_keeps_fields_and_message() {
        let mut form = FormState::new(DiscountCodeForm::default());
        form.edit(|f| f.set_code("sum mer"));
        assert!(form.begin_submit());
        assert!(!form.begin_submit());

        form.fail_submit(&ApiError::http(409, "Code already exists"));
        assert!(!form.is_submitting());
        assert_eq!(form.error(), Some("Code already exists"));
        assert_eq!(form.fields.code, "SUMMER");
    }

    #[test]
    fn fields_are_locked_while_submitting() {
        let mut form = FormState::new(DiscountCodeForm::default());
        form.begin_submit();
        form.edit(|f| f.set_code("x"));
        assert_eq!(form.fields.code, "");
        form.finish_submit();
        form.edit(|f| f.set_code("x"));
        assert_eq!(form.fields.code, "X");
    }
}
