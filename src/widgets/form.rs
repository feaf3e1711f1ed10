use crate::element::{Element, Renderable, Tag};

/// The identifier a login form asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Username,
}

/// A `form` of labelled inputs and a submit button.
#[derive(Debug)]
pub struct Form {
    form: Element,
}

impl Form {
    /// Build a form with one [`FormField`] per item.
    ///
    /// When `action` is given the form posts to it.
    pub fn new<I>(items: I, id_prefix: Option<&str>, submit_text: &str, action: Option<&str>) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut form = Element::new(Tag::Form);
        for item in items {
            form.append_child(FormField::new(item.as_ref(), id_prefix));
        }

        let submit = Element::new(Tag::Button)
            .with_attribute("type", "submit")
            .with_attribute("id", slug(submit_text))
            .with_text(submit_text);
        form.append_child(submit);

        if let Some(action) = action {
            form.set_attribute("action", action);
            form.set_attribute("method", "POST");
        }

        Self { form }
    }

    /// A login form: the identifier field and a password, posting to `action`.
    pub fn login_form(login: LoginField, action: &str) -> Self {
        let identifier = match login {
            LoginField::Email => "Email",
            LoginField::Username => "Username",
        };
        Self::new([identifier, "Password"], Some("user"), "Login", Some(action))
    }

    /// A sign-up form without an action.
    pub fn sign_up_form() -> Self {
        Self::new(["Email", "Username", "Password"], Some("user"), "Sign Up", None)
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.form
    }
}

impl Renderable for Form {
    fn top_level_element(&self) -> &Element {
        &self.form
    }
}

/// A `div` wrapping a `label` and its `input`.
///
/// The field name sets the label text, the placeholder, the ids, and the
/// input type (`email`, `password`, or `text`).
#[derive(Debug)]
pub struct FormField {
    wrapper: Element,
}

impl FormField {
    pub fn new(name: &str, id_prefix: Option<&str>) -> Self {
        let lower = name.to_lowercase();
        let cased = capitalize(name);
        let id = match id_prefix {
            Some(prefix) => format!("{prefix}-{lower}"),
            None => lower.clone(),
        };

        let input_type = match lower.as_str() {
            "email" | "e-mail" => "email",
            "password" => "password",
            _ => "text",
        };

        let label = Element::new(Tag::Label)
            .with_attribute("for", lower.as_str())
            .with_attribute("id", format!("{id}-label"))
            .with_text(&cased);

        let input = Element::new(Tag::Input)
            .with_attribute("name", lower.as_str())
            .with_attribute("id", format!("{id}-input"))
            .with_attribute("placeholder", cased.as_str())
            .with_attribute("type", input_type);

        let wrapper = Element::new(Tag::Div)
            .with_attribute("id", id)
            .with_child(label)
            .with_child(input);

        Self { wrapper }
    }
}

impl Renderable for FormField {
    fn top_level_element(&self) -> &Element {
        &self.wrapper
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

fn slug(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("eMAIL"), "Email");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");
    }

    #[test]
    fn test_form_field() {
        let field = FormField::new("Email", Some("user"));
        assert_eq!(
            field.render(),
            "<div id=\"user-email\" >\
             <label for=\"email\" id=\"user-email-label\" >Email</label>\
             <input id=\"user-email-input\" name=\"email\" placeholder=\"Email\" type=\"email\" />\
             </div>"
        );
    }

    #[test]
    fn test_field_types() {
        let password = FormField::new("password", None).render();
        assert!(password.contains(r#"type="password""#));
        assert!(password.contains(r#"id="password-input""#));

        let nickname = FormField::new("Nickname", None).render();
        assert!(nickname.contains(r#"type="text""#));
    }

    #[test]
    fn test_login_form() {
        let html = Form::login_form(LoginField::Username, "/login").render();
        assert!(html.starts_with(r#"<form action="/login" method="POST" >"#));
        assert!(html.contains(r#"id="user-username""#));
        assert!(html.contains(r#"id="user-password""#));
        assert!(html.ends_with(r#"<button id="login" type="submit" >Login</button></form>"#));
    }

    #[test]
    fn test_sign_up_form_has_no_action() {
        let html = Form::sign_up_form().render();
        assert!(html.starts_with("<form>"));
        assert!(html.contains(r#"<button id="sign-up" type="submit" >Sign Up</button>"#));
    }
}
