use html_escape::encode_quoted_attribute;
use ltiforge_shared::encoding::shell_quote;
use ltiforge_shared::signature::SignedLaunch;

/// The closed set of output representations for a signed launch.
pub enum Renderer {
    /// A minimal HTML page with a manually submitted launch form.
    Html,
    /// Shell variable assignments feeding a curl invocation.
    ShellVars { prefix: String },
}

impl Renderer {
    /// Produces the complete output text for this representation.
    pub fn render(&self, signed: &SignedLaunch) -> String {
        match self {
            Renderer::Html => render_html(signed),
            Renderer::ShellVars { prefix } => {
                let [url_line, params_line] = render_shell_vars(signed, prefix);
                format!("{url_line}\n{params_line}\n")
            }
        }
    }
}

// One text input per parameter, a manual "Launch" submit, and an iframe
// target so submission stays on the page. Deliberately no script
// auto-submit.
fn render_html(signed: &SignedLaunch) -> String {
    let fields: Vec<String> = signed
        .parameters
        .iter()
        .map(|(key, value)| {
            let html_key = encode_quoted_attribute(key);
            let html_value = encode_quoted_attribute(value);
            format!(
                "<div>{html_key}<input type=\"text\" name=\"{html_key}\" value=\"{html_value}\" /></div>"
            )
        })
        .collect();

    [
        "<!DOCTYPE>".to_string(),
        "<html>".to_string(),
        "<body>".to_string(),
        format!(
            "<form name=\"params\" method=\"{}\" target=\"launch\" action=\"{}\">",
            encode_quoted_attribute(&signed.method),
            encode_quoted_attribute(&signed.url)
        ),
        fields.join("\n"),
        "<div><input type=\"submit\" value=\"Launch\" /></div>".to_string(),
        "</form>".to_string(),
        "<iframe name=\"launch\" ></iframe>".to_string(),
        "</body>".to_string(),
        "</html>".to_string(),
    ]
    .join("\n")
}

// Parameter values travel raw inside the quoted literal; only the shell
// quoting protects them.
fn render_shell_vars(signed: &SignedLaunch, prefix: &str) -> [String; 2] {
    let flags = signed
        .parameters
        .iter()
        .map(|(key, value)| format!("-d {key}={value}"))
        .collect::<Vec<_>>()
        .join(" ");

    [
        format!("{prefix}_URL={}", shell_quote(&signed.url)),
        format!("{prefix}_PARAMS={}", shell_quote(&flags)),
    ]
}
