//! Guidepost CLI - inspect and simulate engine state
//!
//! All commands resolve a context from flags, run the engine against the
//! local progress store, and print JSON:
//!   guidepost tips --route /products --role user      → eligible tip list
//!   guidepost flow --route /sell --role seller --new-user
//!                                                     → auto-displayed flow
//!   guidepost state                                   → persisted snapshot
//!   guidepost dismiss <tip-id>                        → record dismissal
//!   guidepost complete <step-id>                      → record completion
//!   guidepost dismiss-flow <flow-id>                  → suppress a flow
//!   guidepost reset                                   → wipe progress state
//!
//! Output format:
//!   --json     Raw JSON (default for non-tty)
//!   --pretty   Pretty-print JSON (default for tty)

use chrono::{Duration, Utc};
use guidepost::logging::init_logging;
use guidepost::{default_catalog, FileStorage, HelpEngine, UserAccount};
use serde_json::{json, Value};
use std::env;
use std::io::IsTerminal;

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let opts = ParsedArgs::parse(&args[1..]);

    if opts.help {
        print_usage();
        return;
    }

    if opts.version {
        println!("guidepost 0.1.0");
        return;
    }

    let result = match opts.command.as_deref() {
        Some("tips") => cmd_tips(&opts),
        Some("flow") => cmd_flow(&opts),
        Some("state") => cmd_state(&opts),
        Some("dismiss") => cmd_dismiss(&opts),
        Some("complete") => cmd_complete(&opts),
        Some("dismiss-flow") => cmd_dismiss_flow(&opts),
        Some("reset") => cmd_reset(&opts),
        Some(cmd) => Err(format!("Unknown command: {}", cmd)),
        None => {
            print_usage();
            return;
        }
    };

    match result {
        Ok(output) => {
            let formatted = if opts.pretty || (!opts.json && std::io::stdout().is_terminal()) {
                serde_json::to_string_pretty(&output).unwrap_or_default()
            } else {
                serde_json::to_string(&output).unwrap_or_default()
            };
            println!("{}", formatted);
        }
        Err(e) => {
            let err = json!({"error": e});
            if opts.pretty || std::io::stdout().is_terminal() {
                eprintln!("{}", serde_json::to_string_pretty(&err).unwrap_or_default());
            } else {
                eprintln!("{}", serde_json::to_string(&err).unwrap_or_default());
            }
            std::process::exit(1);
        }
    }
}

#[derive(Default)]
struct ParsedArgs {
    command: Option<String>,
    id: Option<String>,
    app: Option<String>,
    route: Option<String>,
    role: Option<String>,
    new_user: bool,
    seen_onboarding: bool,
    anonymous: bool,
    json: bool,
    pretty: bool,
    help: bool,
    version: bool,
}

impl ParsedArgs {
    fn parse(args: &[String]) -> Self {
        let mut opts = ParsedArgs::default();
        let mut positional = Vec::new();
        let mut i = 0;

        while i < args.len() {
            let arg = &args[i];
            match arg.as_str() {
                "--help" | "-h" => opts.help = true,
                "--version" | "-V" => opts.version = true,
                "--json" => opts.json = true,
                "--pretty" => opts.pretty = true,
                "--new-user" => opts.new_user = true,
                "--seen-onboarding" => opts.seen_onboarding = true,
                "--anonymous" => opts.anonymous = true,
                "--app" | "-a" => {
                    if i + 1 < args.len() {
                        opts.app = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                "--route" | "-r" => {
                    if i + 1 < args.len() {
                        opts.route = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                "--role" => {
                    if i + 1 < args.len() {
                        opts.role = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                _ if !arg.starts_with('-') => positional.push(arg.clone()),
                _ => {} // Ignore unknown flags
            }
            i += 1;
        }

        if !positional.is_empty() {
            opts.command = Some(positional.remove(0));
        }
        if !positional.is_empty() {
            opts.id = Some(positional.remove(0));
        }

        // Environment fallbacks (lower priority than CLI args)
        if opts.app.is_none() {
            opts.app = env::var("GUIDEPOST_APP").ok().filter(|s| !s.is_empty());
        }
        if opts.route.is_none() {
            opts.route = env::var("GUIDEPOST_ROUTE").ok().filter(|s| !s.is_empty());
        }
        if opts.role.is_none() {
            opts.role = env::var("GUIDEPOST_ROLE").ok().filter(|s| !s.is_empty());
        }

        opts
    }
}

fn print_usage() {
    println!(
        r#"guidepost - Contextual Help Engine

USAGE:
    guidepost <command> [id] [options]

COMMANDS:
    tips                    List eligible tips for the context
    flow                    Run the arm delay and show the auto-displayed flow
    state                   Print the persisted progress snapshot
    dismiss <tip-id>        Dismiss a tip (records shown)
    complete <step-id>      Mark a walkthrough step complete
    dismiss-flow <flow-id>  Permanently dismiss a guided flow
    reset                   Wipe all persisted help state

CONTEXT OPTIONS:
    --app, -a <name>        App name for the local store (env: GUIDEPOST_APP)
    --route, -r <path>      Current route (env: GUIDEPOST_ROUTE, default: /)
    --role <role>           user|seller|admin|traveler (env: GUIDEPOST_ROLE)
    --new-user              Treat the account as created just now
    --seen-onboarding       Account has completed onboarding
    --anonymous             No authenticated user (tips are always empty)

OUTPUT OPTIONS:
    --json                  Raw JSON output
    --pretty                Pretty-print JSON
    --version, -V           Print version

EXAMPLES:
    guidepost tips --route /products --role user
    guidepost flow --route /sell --role seller --new-user
    guidepost dismiss search-filters --route /products --role user
    guidepost state --app storefront
"#
    );
}

fn build_engine(opts: &ParsedArgs) -> Result<HelpEngine, String> {
    let app = opts.app.as_deref().unwrap_or("guidepost");
    let storage = FileStorage::open(app).map_err(|e| format!("Failed to open store: {}", e))?;
    let mut engine = HelpEngine::new(default_catalog().clone(), Box::new(storage));

    if !opts.anonymous {
        let created_at = if opts.new_user { Utc::now() } else { Utc::now() - Duration::days(30) };
        let mut account = UserAccount::new("local")
            .with_created_at(created_at)
            .with_onboarding_completed(opts.seen_onboarding);
        if let Some(role) = &opts.role {
            account = account.with_role(role);
        }
        engine.set_user(Some(account));
    }

    engine.navigate(opts.route.as_deref().unwrap_or("/"));
    Ok(engine)
}

fn cmd_tips(opts: &ParsedArgs) -> Result<Value, String> {
    let engine = build_engine(opts)?;
    let tips: Vec<Value> = engine
        .active_tips()
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "title": t.title,
                "content": t.content,
                "category": t.category,
                "priority": t.priority,
                "show_once": t.show_once,
            })
        })
        .collect();
    Ok(json!({"count": tips.len(), "tips": tips}))
}

fn cmd_flow(opts: &ParsedArgs) -> Result<Value, String> {
    let mut engine = build_engine(opts)?;
    engine.tick().map_err(|e| format!("Tick failed: {}", e))?;

    match engine.active_flow() {
        Some(flow) => {
            let next = engine.next_step().map(|s| json!({"id": s.id, "title": s.title}));
            Ok(json!({
                "flow": {"id": flow.id, "title": flow.title, "steps": flow.steps.len()},
                "next_step": next,
                "progress": engine.flow_progress(),
            }))
        }
        None => Ok(json!({"flow": null})),
    }
}

fn cmd_state(opts: &ParsedArgs) -> Result<Value, String> {
    let engine = build_engine(opts)?;
    serde_json::to_value(engine.progress()).map_err(|e| format!("Encode failed: {}", e))
}

fn cmd_dismiss(opts: &ParsedArgs) -> Result<Value, String> {
    let id = opts.id.as_ref().ok_or("Tip id required: guidepost dismiss <tip-id>")?;
    let mut engine = build_engine(opts)?;
    engine.dismiss(id).map_err(|e| format!("Dismiss failed: {}", e))?;
    Ok(json!({"status": "ok", "dismissed": id}))
}

fn cmd_complete(opts: &ParsedArgs) -> Result<Value, String> {
    let id = opts.id.as_ref().ok_or("Step id required: guidepost complete <step-id>")?;
    let mut engine = build_engine(opts)?;
    engine.complete_step(id).map_err(|e| format!("Complete failed: {}", e))?;
    Ok(json!({"status": "ok", "completed": id, "progress": engine.flow_progress()}))
}

fn cmd_dismiss_flow(opts: &ParsedArgs) -> Result<Value, String> {
    let id = opts.id.as_ref().ok_or("Flow id required: guidepost dismiss-flow <flow-id>")?;
    let mut engine = build_engine(opts)?;
    engine.dismiss_flow(id).map_err(|e| format!("Dismiss failed: {}", e))?;
    Ok(json!({"status": "ok", "dismissed_flow": id}))
}

fn cmd_reset(opts: &ParsedArgs) -> Result<Value, String> {
    let mut engine = build_engine(opts)?;
    engine.reset().map_err(|e| format!("Reset failed: {}", e))?;
    Ok(json!({"status": "reset"}))
}
