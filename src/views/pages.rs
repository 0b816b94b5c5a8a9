//! Page models and their HTML rendering.

use axum::response::{Html, IntoResponse, Response};

use crate::api::forms::FieldErrors;
use crate::domain::{Role, SignupForm};

use super::{escape, layout};

/// View name of the sign-up form page
pub const VIEW_SIGNUP: &str = "user-form/user-signup";

/// View name of the landing page
pub const VIEW_INDEX: &str = "index";

/// View name of the error page
const VIEW_ERROR: &str = "error";

/// The sign-up form page.
///
/// Carries the full view model: the signup-mode marker, the form object
/// (empty or as submitted), the assignable roles, and the role
/// preselected for new accounts.
#[derive(Debug, Clone)]
pub struct SignupPage {
    /// Marks the shared user form as rendering in sign-up mode
    pub signup: bool,
    pub form: SignupForm,
    pub roles: Vec<Role>,
    pub default_role: Role,
    pub errors: FieldErrors,
}

impl SignupPage {
    pub fn new(form: SignupForm, roles: Vec<Role>, default_role: Role, errors: FieldErrors) -> Self {
        Self {
            signup: true,
            form,
            roles,
            default_role,
            errors,
        }
    }

    fn text_field(&self, name: &str, label: &str, kind: &str, value: &str) -> String {
        // Password inputs are never echoed back
        let value = if kind == "password" { "" } else { value };

        let mut markup = format!(
            "    <label for=\"{name}\">{label}</label>\n",
            name = name,
            label = escape(label),
        );
        markup.push_str(&format!(
            "    <input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{value}\">\n",
            kind = kind,
            name = name,
            value = escape(value),
        ));
        if let Some(message) = self.errors.first(name) {
            markup.push_str(&format!(
                "    <span class=\"field-error\" data-field=\"{name}\">{message}</span>\n",
                name = name,
                message = escape(message),
            ));
        }

        markup
    }

    fn role_options(&self) -> String {
        let mut options = String::new();
        let mut default_listed = false;

        for role in &self.roles {
            let selected = if role.id == self.default_role.id {
                default_listed = true;
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                "      <option value=\"{name}\"{selected}>{name}</option>\n",
                name = escape(&role.name),
                selected = selected,
            ));
        }

        // The preselected role is shown even when it is not in the list
        if !default_listed {
            options.push_str(&format!(
                "      <option value=\"{name}\" selected>{name}</option>\n",
                name = escape(&self.default_role.name),
            ));
        }

        options
    }

    fn render(&self) -> String {
        let mode = if self.signup { "signup" } else { "edit" };

        let mut body = String::from("<h1>Sign up</h1>\n");
        body.push_str(&format!(
            "<form method=\"post\" action=\"/signup\" data-mode=\"{}\">\n",
            mode
        ));
        body.push_str(&self.text_field("first_name", "First name", "text", &self.form.first_name));
        body.push_str(&self.text_field("last_name", "Last name", "text", &self.form.last_name));
        body.push_str(&self.text_field("email", "Email", "email", &self.form.email));
        body.push_str(&self.text_field("username", "Username", "text", &self.form.username));
        body.push_str(&self.text_field("password", "Password", "password", ""));
        body.push_str(&self.text_field("confirm_password", "Confirm password", "password", ""));
        body.push_str("    <label for=\"role\">Role</label>\n");
        body.push_str("    <select id=\"role\" name=\"role\" disabled>\n");
        body.push_str(&self.role_options());
        body.push_str("    </select>\n");
        body.push_str("    <button type=\"submit\">Sign up</button>\n");
        body.push_str("</form>\n");

        layout(VIEW_SIGNUP, "Sign up", &body)
    }
}

impl IntoResponse for SignupPage {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

/// The landing page.
///
/// Sign-up submissions resolve here on success and on both service-error
/// paths; the errors the service raised ride along on the model.
#[derive(Debug, Clone, Default)]
pub struct IndexPage {
    pub notice: Option<String>,
    pub form_error: Option<String>,
    pub field_errors: FieldErrors,
}

impl IndexPage {
    /// Landing page after a successful sign-up
    pub fn welcome(username: &str) -> Self {
        Self {
            notice: Some(format!("Account created for {}", username)),
            ..Self::default()
        }
    }

    /// Landing page carrying errors the service attached to named fields
    pub fn with_field_errors(field_errors: FieldErrors) -> Self {
        Self {
            field_errors,
            ..Self::default()
        }
    }

    /// Landing page carrying a form-level error
    pub fn with_form_error(message: impl Into<String>) -> Self {
        Self {
            form_error: Some(message.into()),
            ..Self::default()
        }
    }

    fn render(&self) -> String {
        let mut body = String::from("<h1>Welcome</h1>\n");

        if let Some(notice) = &self.notice {
            body.push_str(&format!("<p class=\"notice\">{}</p>\n", escape(notice)));
        }
        if let Some(error) = &self.form_error {
            body.push_str(&format!("<p class=\"form-error\">{}</p>\n", escape(error)));
        }
        if !self.field_errors.is_empty() {
            body.push_str("<ul class=\"field-errors\">\n");
            for (field, message) in self.field_errors.iter() {
                body.push_str(&format!(
                    "  <li data-field=\"{field}\">{message}</li>\n",
                    field = field,
                    message = escape(message),
                ));
            }
            body.push_str("</ul>\n");
        }

        body.push_str("<p><a href=\"/signup\">Create an account</a></p>\n");

        layout(VIEW_INDEX, "Welcome", &body)
    }
}

impl IntoResponse for IndexPage {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

/// The error page rendered for unhandled application errors.
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub code: &'static str,
    pub message: String,
}

impl ErrorPage {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn render(&self) -> String {
        let body = format!(
            "<h1>Something went wrong</h1>\n\
             <p class=\"error-code\">{code}</p>\n\
             <p class=\"error-message\">{message}</p>\n\
             <p><a href=\"/\">Back to the start page</a></p>\n",
            code = self.code,
            message = escape(&self.message),
        );

        layout(VIEW_ERROR, "Error", &body)
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<Role> {
        vec![
            Role::new(1, "ADMIN", "Administrator role"),
            Role::new(3, "USER", "ROLE USER"),
        ]
    }

    fn default_role() -> Role {
        Role::new(3, "USER", "ROLE USER")
    }

    #[test]
    fn test_signup_page_renders_view_name_and_form() {
        let page = SignupPage::new(
            SignupForm::default(),
            roles(),
            default_role(),
            FieldErrors::new(),
        );
        let html = page.render();

        assert!(html.contains("data-view=\"user-form/user-signup\""));
        assert!(html.contains("data-mode=\"signup\""));
        assert!(html.contains("name=\"first_name\""));
        assert!(html.contains("<option value=\"USER\" selected>USER</option>"));
    }

    #[test]
    fn test_signup_page_echoes_submitted_values_escaped() {
        let mut form = SignupForm::default();
        form.last_name = "O'Brien".to_string();
        form.password = "secret".to_string();

        let page = SignupPage::new(form, roles(), default_role(), FieldErrors::new());
        let html = page.render();

        assert!(html.contains("value=\"O&#39;Brien\""));
        assert!(!html.contains("secret"));
    }

    #[test]
    fn test_signup_page_shows_field_errors() {
        let mut errors = FieldErrors::new();
        errors.add("first_name", "First name must be 2 to 15 characters");

        let page = SignupPage::new(SignupForm::default(), roles(), default_role(), errors);
        let html = page.render();

        assert!(html.contains("data-field=\"first_name\""));
        assert!(html.contains("First name must be 2 to 15 characters"));
    }

    #[test]
    fn test_signup_page_lists_default_role_even_when_role_list_is_empty() {
        let page = SignupPage::new(
            SignupForm::default(),
            Vec::new(),
            default_role(),
            FieldErrors::new(),
        );
        let html = page.render();

        assert!(html.contains("<option value=\"USER\" selected>USER</option>"));
    }

    #[test]
    fn test_index_page_renders_view_name() {
        let html = IndexPage::default().render();
        assert!(html.contains("data-view=\"index\""));
    }

    #[test]
    fn test_index_page_carries_service_field_error() {
        let mut errors = FieldErrors::new();
        errors.add("username", "Username not available");

        let html = IndexPage::with_field_errors(errors).render();

        assert!(html.contains("data-view=\"index\""));
        assert!(html.contains("data-field=\"username\""));
        assert!(html.contains("Username not available"));
    }

    #[test]
    fn test_error_page_renders_code_and_message() {
        let html = ErrorPage::new("NOT_FOUND", "Resource not found").render();

        assert!(html.contains("data-view=\"error\""));
        assert!(html.contains("NOT_FOUND"));
    }
}
