use anyhow::{Context, bail};
use formwright::{
    CategoryValue, DialogDescriptor, FieldDescriptor, Form, InputRegistry, Model,
    SectionDescriptor, TabDescriptor, ValidationOutcome, Validator,
};

/// How the controller authenticates a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    Basic,
    Integrated,
}

impl AuthType {
    pub const ALL: [Self; 2] = [Self::Basic, Self::Integrated];

    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Integrated => "integrated",
        }
    }

    pub fn category(self) -> CategoryValue {
        let display_name = match self {
            Self::Basic => "Basic",
            Self::Integrated => "Windows Authentication",
        };
        CategoryValue::new(self.name(), display_name)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|auth| auth.name() == name)
    }
}

/// Connect to a big data cluster controller.
pub fn add_controller_dialog() -> DialogDescriptor {
    let connection = SectionDescriptor::with_fields(
        "Cluster",
        vec![
            FieldDescriptor::text("url", "URL")
                .with_placeholder("url")
                .with_required(true),
            FieldDescriptor::options(
                "auth",
                "Authentication type",
                AuthType::ALL.map(AuthType::category),
            )
            .with_default(AuthType::Basic.name()),
            FieldDescriptor::text("username", "Username").with_placeholder("username"),
            FieldDescriptor::password("password", "Password").with_placeholder("password"),
            FieldDescriptor::checkbox("remember_password", "Remember Password")
                .with_default("true"),
        ],
    )
    .collapsible(false);

    DialogDescriptor::new(
        "Add New Controller",
        "add-controller",
        vec![TabDescriptor::new("Connection", vec![connection])],
    )
    .with_ok_label("Add")
}

/// Basic authentication needs a username and a password.
pub fn credentials_validator(form: &Form) -> Validator {
    let inputs = form.inputs().clone();
    Validator::new(move || match missing_credential(&inputs) {
        Some(message) => ValidationOutcome::new(false, message),
        None => ValidationOutcome::new(true, ""),
    })
}

fn missing_credential(inputs: &InputRegistry) -> Option<&'static str> {
    if inputs.text("auth").as_deref() != Some(AuthType::Basic.name()) {
        return None;
    }
    if inputs.is_empty_input("username") {
        Some("Username is required")
    } else if inputs.is_empty_input("password") {
        Some("Password is required")
    } else {
        None
    }
}

/// The values of a completed add-controller dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConnection {
    pub url: String,
    pub auth: AuthType,
    pub username: Option<String>,
    pub password: Option<String>,
    pub remember_password: bool,
}

impl ControllerConnection {
    pub fn from_model(model: &Model) -> anyhow::Result<Self> {
        let url = model.get("url").context("Controller URL is missing")?;
        let auth_name = model.get("auth").context("Authentication type is missing")?;
        let Some(auth) = AuthType::from_name(auth_name) else {
            bail!("Unknown authentication type '{auth_name}'");
        };
        let credential = |key: &str| match auth {
            AuthType::Basic => model.get(key).map(str::to_string),
            AuthType::Integrated => None,
        };
        Ok(Self {
            url: url.to_string(),
            auth,
            username: credential("username"),
            password: credential("password"),
            remember_password: model.get_bool("remember_password"),
        })
    }
}
