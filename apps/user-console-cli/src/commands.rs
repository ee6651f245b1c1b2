use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use user_console::{
    FilterCriteria, InMemoryUserDirectory, NavKey, UserConsoleService, UserPatch,
};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::render;
use crate::{EditArgs, ListArgs, StatsArgs, SuggestArgs};

/// Directory loaded from the configured users file plus a service over it.
struct Console {
    directory: Arc<InMemoryUserDirectory>,
    service: UserConsoleService,
}

impl Console {
    async fn open(config: &AppConfig) -> Result<Self> {
        let directory = Arc::new(InMemoryUserDirectory::from_json_file(config.users_file()?)?);
        let service = UserConsoleService::new(directory.clone(), config.console.clone());
        service.reload().await;
        Ok(Self { directory, service })
    }

    fn save(&self, path: &Path) -> Result<()> {
        self.directory.save_json_file(path)
    }
}

pub fn check(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    if let Some(path) = config.data.users_file.as_deref() {
        let directory = InMemoryUserDirectory::from_json_file(path)?;
        println!(
            "Users file {} is valid ({} users)",
            path.display(),
            directory.snapshot().len()
        );
    }
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

pub async fn list(config: &AppConfig, args: &ListArgs) -> Result<()> {
    let console = Console::open(config).await?;
    let mut session = console.service.session();

    session.set_criteria(FilterCriteria {
        query: args.query.clone(),
        role: args.role.map(Into::into),
        status: args.status.map(Into::into),
        date_from: args.from.clone(),
        date_to: args.to.clone(),
        last_login_days: args.last_login_days,
        sort_by: args.sort.map(Into::into),
        sort_direction: args.sort_dir(),
    });
    session.set_page_size(args.page_size);
    session.set_page(args.page);

    let view = session.view();
    if args.json {
        render::print_json(&view)
    } else {
        render::print_page(&view.page);
        Ok(())
    }
}

pub async fn suggest(config: &AppConfig, args: &SuggestArgs) -> Result<()> {
    let console = Console::open(config).await?;
    let mut session = console.service.session();
    session.on_query_settled(&args.query);

    if let Some(index) = args.select {
        let available = session.navigator().suggestions().len();
        if index >= available {
            anyhow::bail!(
                "No suggestion at index {index} for '{}' ({available} available)",
                args.query
            );
        }
        for _ in 0..=index {
            session.handle_key(NavKey::ArrowDown);
        }
        let committed = session
            .handle_key(NavKey::Enter)
            .with_context(|| format!("No suggestion for '{}'", args.query))?;
        tracing::info!(suggestion = %committed, "Committed suggestion");
    }

    let view = session.view();
    if args.json {
        return render::print_json(&view);
    }
    if args.select.is_some() {
        render::print_page(&view.page);
    } else {
        render::print_suggestions(&view.suggestions);
    }
    Ok(())
}

pub async fn stats(config: &AppConfig, args: &StatsArgs) -> Result<()> {
    let console = Console::open(config).await?;
    let local = console.service.local_statistics();
    let server = args
        .server
        .then(|| console.service.store().server_statistics())
        .flatten();

    if args.json {
        return render::print_json(&serde_json::json!({
            "local": local,
            "server": server,
        }));
    }
    render::print_statistics("Statistics", &local);
    if let Some(server) = server {
        render::print_statistics("Directory statistics", &server);
    }
    Ok(())
}

pub async fn set_blocked(config: &AppConfig, id: Uuid, blocked: bool) -> Result<()> {
    let console = Console::open(config).await?;
    let user = if blocked {
        console.service.block_user(id).await?
    } else {
        console.service.unblock_user(id).await?
    };
    console.save(config.users_file()?)?;

    let verb = if blocked { "Blocked" } else { "Unblocked" };
    println!("{verb} {} <{}> ({})", user.display_name, user.email, user.id);
    Ok(())
}

pub async fn edit(config: &AppConfig, args: EditArgs) -> Result<()> {
    let console = Console::open(config).await?;
    let patch = UserPatch {
        display_name: args.name,
        email: args.email,
        phone: args.phone,
    };
    let user = console.service.update_user(args.id, patch).await?;
    console.save(config.users_file()?)?;

    println!("Updated {}", user.id);
    render::print_user(&user);
    Ok(())
}
