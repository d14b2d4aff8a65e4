use super::prompts;
use super::{item_json, parse_release_date, short_id, AppContext};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use watchdeck_core::StoreError;
use watchdeck_models::{parse_genres, ContentType, NewContent, Platform, KNOWN_GENRES};

pub struct AddArgs {
    pub title: Option<String>,
    pub content_type: ContentType,
    pub platform: Option<Platform>,
    pub release_date: Option<String>,
    pub genre: Option<String>,
    pub interactive: bool,
}

pub fn run_add(ctx: &AppContext, args: AddArgs, output: &Output) -> Result<()> {
    let input = if args.interactive {
        prompt_missing(args)?
    } else {
        NewContent {
            title: args.title.unwrap_or_default(),
            content_type: args.content_type,
            platform: args.platform,
            genre: args.genre.as_deref().map(parse_genres).unwrap_or_default(),
            release_date: args.release_date.as_deref().map(parse_release_date).transpose()?,
        }
    };

    let mut store = ctx.open_store();
    match store.add(input) {
        Ok(item) => {
            output.success(format!(
                "Added {} '{}' [{}]",
                item.content_type.display_name().to_lowercase(),
                item.title,
                short_id(&item.id)
            ));
            output.json(&item_json(&item));
            Ok(())
        }
        Err(StoreError::Validation(fields)) => Err(eyre!(
            "Please fill in all required fields (missing: {})",
            fields.join(", ")
        )),
        Err(e) => Err(e.into()),
    }
}

/// Fill in anything not given on the command line, the way the add form does
fn prompt_missing(args: AddArgs) -> Result<NewContent> {
    let title = match args.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => prompts::prompt_string("Title", None)?,
    };

    let type_names: Vec<&str> = ContentType::ALL.iter().map(|t| t.display_name()).collect();
    let default_type = ContentType::ALL
        .iter()
        .position(|t| *t == args.content_type)
        .unwrap_or(0);
    let content_type = ContentType::ALL[prompts::prompt_select("Type", &type_names, default_type)?];

    let platform = match args.platform {
        Some(platform) => platform,
        None => {
            let names: Vec<&str> = Platform::ALL.iter().map(|p| p.display_name()).collect();
            Platform::ALL[prompts::prompt_select("Platform", &names, 0)?]
        }
    };

    let release_date = match args.release_date {
        Some(date) => parse_release_date(&date)?,
        None => loop {
            let entered = prompts::prompt_string("Release date (YYYY-MM-DD)", None)?;
            match parse_release_date(&entered) {
                Ok(date) => break date,
                Err(e) => eprintln!("{}", e),
            }
        },
    };

    let genre = match args.genre {
        Some(genre) => parse_genres(&genre),
        None => prompts::prompt_multi_select("Genres (space to toggle)", &KNOWN_GENRES)?
            .into_iter()
            .map(|i| KNOWN_GENRES[i].to_string())
            .collect(),
    };

    Ok(NewContent {
        title,
        content_type,
        platform: Some(platform),
        genre,
        release_date: Some(release_date),
    })
}
