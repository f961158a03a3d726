use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::error;

use crate::{
    domain::{
        models::registration_form::RegistrationForm,
        repositories::user_record_repository::UserRecordRepository,
    },
    presentation::screens::registration_screen::{Alert, RegistrationScreen},
};

const HELP: &str = "\
Commands:
  code <value>       set personal code
  name <value>       set full name
  email <value>      set email
  password <value>   set password
  confirm <value>    set password confirmation
  save | load | clear
  show               print current fields
  help | quit";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    PersonalCode(String),
    FullName(String),
    Email(String),
    Password(String),
    ConfirmPassword(String),
    Save,
    Load,
    Clear,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Field values keep inner whitespace; a bare field command sets it empty.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return None;
        }

        let (word, value) = match trimmed.split_once(char::is_whitespace) {
            Some((word, value)) => (word, value.to_string()),
            None => (trimmed, String::new()),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "code" => Self::PersonalCode(value),
            "name" => Self::FullName(value),
            "email" => Self::Email(value),
            "password" => Self::Password(value),
            "confirm" => Self::ConfirmPassword(value),
            "save" => Self::Save,
            "load" => Self::Load,
            "clear" => Self::Clear,
            "show" => Self::Show,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

/// Render the form with both password fields masked
pub fn render_form(form: &RegistrationForm) -> String {
    format!(
        "Code: {}\nName: {}\nEmail: {}\nPassword: {}\nConfirm password: {}",
        form.personal_code,
        form.full_name,
        form.email,
        mask(&form.password),
        mask(&form.confirm_password),
    )
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

async fn write_alert<W: AsyncWrite + Unpin>(out: &mut W, alert: &Alert) -> std::io::Result<()> {
    write_line(out, &format!("> {}", alert.message)).await
}

/// Drive the screen from line-oriented input until `quit` or end of input.
///
/// Storage errors are reported and the loop carries on so the user can retry.
pub async fn run<S, L, I, O>(
    screen: &mut RegistrationScreen<S, L>,
    input: I,
    mut output: O,
) -> std::io::Result<()>
where
    S: UserRecordRepository,
    L: UserRecordRepository,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    write_line(&mut output, HELP).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::PersonalCode(v) => screen.set_personal_code(v),
            Command::FullName(v) => screen.set_full_name(v),
            Command::Email(v) => screen.set_email(v),
            Command::Password(v) => screen.set_password(v),
            Command::ConfirmPassword(v) => screen.set_confirm_password(v),
            Command::Save => match screen.save().await {
                Ok(alert) => write_alert(&mut output, &alert).await?,
                Err(e) => {
                    error!(error = %e, "Save failed");
                    write_line(&mut output, &format!("Error: {e}")).await?;
                }
            },
            Command::Load => match screen.load().await {
                Ok(Some(alert)) => write_alert(&mut output, &alert).await?,
                Ok(None) => write_line(&mut output, &render_form(screen.form())).await?,
                Err(e) => {
                    error!(error = %e, "Load failed");
                    write_line(&mut output, &format!("Error: {e}")).await?;
                }
            },
            Command::Clear => screen.clear(),
            Command::Show => write_line(&mut output, &render_form(screen.form())).await?,
            Command::Help => write_line(&mut output, HELP).await?,
            Command::Quit => break,
            Command::Unknown(word) => {
                write_line(&mut output, &format!("Unknown command: {word} (try \"help\")")).await?
            }
        }
    }

    Ok(())
}
