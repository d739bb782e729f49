//! Statement emission into the Selenide / JUnit 5 idiom.
//!
//! One exhaustive match over the closed command vocabulary produces one
//! statement per command (or none for the mouse pseudo-commands), and
//! [`generate`] assembles the whole class: import header, class
//! declaration, `setup` method, one `@Test` method per recorded test.
//!
//! Everything here is pure. Same suite in, byte-identical lines out.

use tracing::trace;

use crate::suite::{SideCommand, Suite};
use crate::{locator, value, GenError, Identifier, Result};

const INDENT: &str = "    ";

/// Fixed import block heading every generated class.
const HEADER: &[&str] = &[
    "import org.junit.jupiter.api.BeforeEach;",
    "import org.junit.jupiter.api.Test;",
    "import com.codeborne.selenide.Configuration;",
    "import com.codeborne.selenide.WebDriverRunner;",
    "",
    "import static com.codeborne.selenide.Selenide.*;",
    "import static com.codeborne.selenide.Condition.*;",
    "import static com.codeborne.selenide.Selectors.*;",
    "import static com.codeborne.selenide.WebDriverRunner.*;",
    "",
];

/// Translate one command into its Java statement.
///
/// Returns `Ok(None)` for the three mouse pseudo-commands, which have no
/// Selenide equivalent and are skipped without aborting the suite.
///
/// # Errors
///
/// Propagates locator and value translation failures, and returns
/// [`GenError::UnknownCommand`] for a name outside the vocabulary.
fn statement(cmd: &SideCommand) -> Result<Option<String>> {
    let stmt = match cmd.command.as_str() {
        // `open` takes a URL, never an element locator: the target must not
        // go through locator translation.
        "open" => format!("open(\"{}\")", cmd.target),
        "selectFrame" => format!("switchTo().frame({})", locator::translate(&cmd.target)?),
        "click" => format!("$({}).click()", locator::translate(&cmd.target)?),
        "type" => format!(
            "$({}).val(\"{}\")",
            locator::translate(&cmd.target)?,
            cmd.value
        ),
        "sendKeys" => format!(
            "$({}).val({})",
            locator::translate(&cmd.target)?,
            value::translate_key(&cmd.value)?
        ),
        "select" => format!(
            "$({}).{}",
            locator::translate(&cmd.target)?,
            value::translate_select_option(&cmd.value)?
        ),
        "setWindowSize" => format!("Configuration.browserSize = \"{}\"", cmd.value),
        "verifyText" => format!(
            "$({}).shouldHave(text(\"{}\"))",
            locator::translate(&cmd.target)?,
            cmd.value
        ),
        "mouseDownAt" | "mouseMoveAt" | "mouseUpAt" => return Ok(None),
        _ => {
            return Err(GenError::UnknownCommand {
                command: cmd.command.clone(),
                value: cmd.value.clone(),
            })
        }
    };
    Ok(Some(format!("{stmt};")))
}

/// Generate the full Java source for one suite, as ordered lines.
///
/// Fail-fast: the first translation error aborts the whole suite and the
/// partial line sequence must be discarded by the caller.
///
/// # Errors
///
/// Any [`GenError`] from identifier sanitization or command translation.
pub fn generate(suite: &Suite) -> Result<Vec<String>> {
    let class_name = suite.class_name()?;

    let mut lines: Vec<String> = HEADER.iter().map(|l| (*l).to_owned()).collect();
    lines.push(format!("public class {class_name} {{"));
    lines.push(format!("{INDENT}@BeforeEach"));
    lines.push(format!("{INDENT}public void setup() {{"));
    lines.push(format!(
        "{INDENT}{INDENT}Configuration.baseUrl = \"{}\";",
        suite.url
    ));
    lines.push(format!(
        "{INDENT}{INDENT}Configuration.browser = WebDriverRunner.CHROME;"
    ));
    lines.push(format!("{INDENT}}}"));

    for test in &suite.tests {
        let method = Identifier::sanitize(&test.name)?;
        lines.push(String::new());
        lines.push(format!("{INDENT}@Test"));
        lines.push(format!("{INDENT}public void {method}() {{"));
        for cmd in &test.commands {
            if let Some(stmt) = statement(cmd)? {
                trace!(command = %cmd.command, %stmt, "emitted");
                lines.push(format!("{INDENT}{INDENT}{stmt}"));
            }
        }
        lines.push(format!("{INDENT}}}"));
    }

    lines.push("}".to_owned());
    Ok(lines)
}
