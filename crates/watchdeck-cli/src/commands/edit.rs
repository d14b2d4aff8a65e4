use super::{item_json, parse_release_date, resolve_id, short_id, AppContext};
use crate::output::Output;
use color_eyre::Result;
use serde_json::json;
use watchdeck_models::{parse_genres, ContentUpdate, Platform, Rating};

pub struct UpdateArgs {
    pub title: Option<String>,
    pub platform: Option<Platform>,
    pub genre: Option<String>,
    pub release_date: Option<String>,
    pub watched: Option<bool>,
    pub rating: Option<Rating>,
    pub clear_rating: bool,
}

impl UpdateArgs {
    fn into_update(self) -> Result<ContentUpdate> {
        let mut update = ContentUpdate {
            title: self.title,
            platform: self.platform,
            genre: self.genre.as_deref().map(parse_genres),
            release_date: self.release_date.as_deref().map(parse_release_date).transpose()?,
            watched: self.watched,
            rating: None,
        };
        if let Some(rating) = self.rating {
            update = update.rating(rating);
        } else if self.clear_rating {
            update = update.clear_rating();
        }
        Ok(update)
    }
}

pub fn run_update(ctx: &AppContext, id: &str, args: UpdateArgs, output: &Output) -> Result<()> {
    let update = args.into_update()?;
    if update.is_empty() {
        output.warn("Nothing to update. Pass at least one field, e.g. --watched true");
        return Ok(());
    }

    let mut store = ctx.open_store();
    let Some(id) = resolve_id(store.items(), id)? else {
        output.warn(format!("No item matches '{}'", id));
        return Ok(());
    };

    if store.update(id, &update)? {
        if let Some(item) = store.get(id) {
            output.success(format!("Updated '{}'", item.title));
            output.json(&item_json(&item));
        }
    } else {
        output.warn(format!("No item with id {}", id));
    }
    Ok(())
}

pub fn run_watch(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let mut store = ctx.open_store();
    let Some(id) = resolve_id(store.items(), id)? else {
        output.warn(format!("No item matches '{}'", id));
        return Ok(());
    };

    match store.toggle_watched(id)? {
        Some(item) => {
            let state = if item.watched { "watched" } else { "watch later" };
            output.success(format!("Marked '{}' as {}", item.title, state));
            output.json(&item_json(&item));
        }
        None => output.warn(format!("No item with id {}", id)),
    }
    Ok(())
}

pub fn run_rate(ctx: &AppContext, id: &str, stars: Rating, output: &Output) -> Result<()> {
    let mut store = ctx.open_store();
    let Some(id) = resolve_id(store.items(), id)? else {
        output.warn(format!("No item matches '{}'", id));
        return Ok(());
    };

    match store.toggle_rating(id, stars)? {
        Some(item) => {
            match item.rating {
                Some(rating) => output.success(format!("Rated '{}' {}", item.title, rating.stars())),
                None => output.success(format!("Cleared rating for '{}'", item.title)),
            }
            output.json(&item_json(&item));
        }
        None => output.warn(format!("No item with id {}", id)),
    }
    Ok(())
}

pub fn run_move(ctx: &AppContext, id: &str, position: usize, output: &Output) -> Result<()> {
    let mut store = ctx.open_store();
    let Some(id) = resolve_id(store.items(), id)? else {
        output.warn(format!("No item matches '{}'", id));
        return Ok(());
    };

    // Positions are 1-based on the command line
    if store.move_item(id, position.saturating_sub(1))? {
        let index = store.items().iter().position(|item| item.id == id).unwrap_or_default();
        output.success(format!("Moved [{}] to position {}", short_id(&id), index + 1));
        output.json(&json!({ "id": id.to_string(), "position": index + 1 }));
    } else {
        output.warn(format!("No item with id {}", id));
    }
    Ok(())
}

pub fn run_remove(ctx: &AppContext, id: &str, output: &Output) -> Result<()> {
    let mut store = ctx.open_store();
    let Some(id) = resolve_id(store.items(), id)? else {
        output.warn(format!("No item matches '{}'", id));
        return Ok(());
    };

    let title = store.get(id).map(|item| item.title);
    if store.remove(id)? {
        output.success(format!("Removed '{}'", title.unwrap_or_else(|| id.to_string())));
    } else {
        output.info(format!("No item with id {}; nothing removed", id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> UpdateArgs {
        UpdateArgs {
            title: None,
            platform: None,
            genre: None,
            release_date: None,
            watched: None,
            rating: None,
            clear_rating: false,
        }
    }

    #[test]
    fn test_empty_args_make_empty_update() {
        assert!(empty_args().into_update().unwrap().is_empty());
    }

    #[test]
    fn test_clear_rating_flag() {
        let args = UpdateArgs {
            clear_rating: true,
            ..empty_args()
        };
        assert_eq!(args.into_update().unwrap().rating, Some(None));
    }

    #[test]
    fn test_genre_and_watched() {
        let args = UpdateArgs {
            genre: Some("thriller, crime".to_string()),
            watched: Some(true),
            ..empty_args()
        };
        let update = args.into_update().unwrap();
        assert_eq!(update.genre, Some(vec!["Thriller".to_string(), "Crime".to_string()]));
        assert_eq!(update.watched, Some(true));
        assert_eq!(update.rating, None);
    }

    #[test]
    fn test_bad_release_date() {
        let args = UpdateArgs {
            release_date: Some("soon".to_string()),
            ..empty_args()
        };
        assert!(args.into_update().is_err());
    }
}
