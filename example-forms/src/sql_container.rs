use formwright::{DialogDescriptor, FieldDescriptor, SectionDescriptor, TabDescriptor};

pub const SQL_SERVER_IMAGE: &str = "mcr.microsoft.com/mssql/server:2019-latest";

/// Deploy a SQL Server container image.
pub fn sql_container_dialog() -> DialogDescriptor {
    let settings = SectionDescriptor::with_fields(
        "Container settings",
        vec![
            FieldDescriptor::readonly_text("Image", SQL_SERVER_IMAGE).with_font_style("italic"),
            FieldDescriptor::date_time_text("container_name", "Container name")
                .with_default("sql2019-")
                .with_required(true),
            FieldDescriptor::sql_password("sa_password", "SQL Server sa password")
                .with_confirmation("Confirm password")
                .with_required(true),
        ],
    );
    let ports = SectionDescriptor::with_rows(
        "Ports",
        vec![vec![
            FieldDescriptor::number("port", "Port")
                .with_default("1433")
                .with_bounds(Some(1.0), Some(65535.0)),
            FieldDescriptor::number("admin_port", "Dedicated admin port")
                .with_bounds(Some(1.0), Some(65535.0)),
        ]],
    )
    .collapsed(true);
    let terms = SectionDescriptor::with_fields(
        "License",
        vec![FieldDescriptor::checkbox("accept_eula", "I accept the license terms")],
    )
    .collapsible(false);

    DialogDescriptor::new(
        "Deploy SQL Server container image",
        "sql-image",
        vec![TabDescriptor::new("General", vec![settings, ports, terms])],
    )
    .with_ok_label("Deploy")
}
