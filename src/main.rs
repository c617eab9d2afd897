use book_finder::views::render_session;
use book_finder::{
    Config, GatewayError, OpenLibraryGateway, PageRequest, SearchController, SearchGateway,
    SearchResultPage,
};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

type Gateway = Arc<dyn SearchGateway + Send + Sync>;
type Controller = SearchController<dyn SearchGateway + Send + Sync>;
type Completion = (PageRequest, Result<SearchResultPage, GatewayError>);

const HELP: &str = "Commands:
  search <title>   (s)  search the catalog by title
  more             (m)  load the next page of results
  retry            (r)  run the current search again
  clear            (c)  clear the current search
  help             (h)  show this help
  quit             (q)  exit
Any other input is searched as a title.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    More,
    Retry,
    Clear,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match (word.to_lowercase().as_str(), rest.is_empty()) {
        ("search" | "s", _) => Command::Search(rest.to_string()),
        ("more" | "m", true) => Command::More,
        ("retry" | "r", true) => Command::Retry,
        ("clear" | "c", true) => Command::Clear,
        ("help" | "h" | "?", true) => Command::Help,
        ("quit" | "q" | "exit", true) => Command::Quit,
        _ => Command::Search(line.to_string()),
    };
    Some(command)
}

fn spawn_fetch(gateway: Gateway, request: PageRequest, tx: mpsc::UnboundedSender<Completion>) {
    tokio::spawn(async move {
        let outcome = request.fetch(gateway.as_ref()).await;
        // Receiver is only gone during shutdown
        let _ = tx.send((request, outcome));
    });
}

fn dispatch(controller: &mut Controller, command: Command, tx: &mpsc::UnboundedSender<Completion>) {
    let request = match command {
        Command::Search(query) => controller.begin_search(&query),
        Command::More => controller.begin_load_more(),
        Command::Retry => controller.begin_retry(),
        Command::Clear => {
            controller.clear();
            None
        }
        Command::Help | Command::Quit => None,
    };

    if let Some(request) = request {
        spawn_fetch(controller.gateway(), request, tx.clone());
    }
}

fn render(controller: &Controller, config: &Config) {
    println!("\n{}\n", render_session(controller.session(), &config.covers_url));
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("book_finder=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("Using catalog at {}", config.api_url);

    let gateway: Gateway = Arc::new(OpenLibraryGateway::new(&config)?);
    let mut controller: Controller = SearchController::new(gateway);
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();

    let initial_query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !initial_query.trim().is_empty() {
        dispatch(&mut controller, Command::Search(initial_query), &tx);
    }

    render(&controller, &config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        // With input closed, stay only long enough to show the pending result
        if !stdin_open && !controller.session().is_loading() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(line)) => match parse_command(&line) {
                        Some(Command::Quit) => break,
                        Some(Command::Help) => {
                            println!("{}", HELP);
                            render(&controller, &config);
                        }
                        Some(command) => {
                            dispatch(&mut controller, command, &tx);
                            render(&controller, &config);
                        }
                        None => render(&controller, &config),
                    },
                    Ok(None) => stdin_open = false,
                    Err(e) => {
                        warn!("Failed to read input: {}", e);
                        stdin_open = false;
                    }
                }
            }
            Some((request, outcome)) = rx.recv() => {
                if controller.complete(&request, outcome) {
                    render(&controller, &config);
                }
            }
        }
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_commands() {
        assert_eq!(parse_command("more"), Some(Command::More));
        assert_eq!(parse_command(" M "), Some(Command::More));
        assert_eq!(parse_command("retry"), Some(Command::Retry));
        assert_eq!(parse_command("clear"), Some(Command::Clear));
        assert_eq!(parse_command("help"), Some(Command::Help));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_search() {
        assert_eq!(
            parse_command("search  the hobbit "),
            Some(Command::Search("the hobbit".to_string()))
        );
        assert_eq!(parse_command("s dune"), Some(Command::Search("dune".to_string())));
    }

    #[test]
    fn test_bare_text_is_a_search() {
        assert_eq!(parse_command("dune"), Some(Command::Search("dune".to_string())));
        assert_eq!(
            parse_command("more tales"),
            Some(Command::Search("more tales".to_string()))
        );
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
    }
}
