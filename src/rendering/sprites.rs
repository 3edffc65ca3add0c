//! Sprite sheet table: `(kind, state, facing)` to an atlas region.
//!
//! The table is filled once at startup with every sheet an actor can need.
//! Atlas layouts are cut as soon as each image has loaded, because frame
//! sizes come from the image dimensions. Lookups never panic; anything that
//! cannot be drawn comes back as a [`SpriteLookupError`] and the caller
//! draws a placeholder instead.

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::utils::HashMap;

use crate::core::{ActorKind, AnimState, ClipTable, Facing, SpriteLookupError};
use crate::enemies::{BOSS, MINION};
use crate::player::PLAYER_CLIPS;

/// States the hero has artwork for.
const HERO_STATES: [AnimState; 4] = [
    AnimState::Idle,
    AnimState::Run,
    AnimState::Attack,
    AnimState::Death,
];

/// Key into the sprite table.
pub type SpriteKey = (ActorKind, AnimState, Facing);

/// Where a sheet lives and how it is cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSpec {
    pub path: String,
    pub columns: u32,
    pub rows: u32,
    /// Row holding this facing.
    pub row: u32,
}

/// Sheet layout for one table entry.
pub fn sheet_spec(kind: ActorKind, state: AnimState, facing: Facing) -> Option<SheetSpec> {
    match kind {
        ActorKind::Player => HERO_STATES.contains(&state).then(|| SheetSpec {
            path: format!("images/hero/{}_{}_40x40.png", state.name(), facing.name()),
            columns: PLAYER_CLIPS.frames(state),
            rows: 1,
            row: 0,
        }),
        ActorKind::Minion | ActorKind::Boss => {
            if state == AnimState::Gone {
                return None;
            }
            let (folder, clips): (&str, &ClipTable) = match kind {
                ActorKind::Boss => (BOSS.name, &BOSS.clips),
                _ => (MINION.name, &MINION.clips),
            };
            let row = Facing::ALL.iter().position(|f| *f == facing)? as u32;
            Some(SheetSpec {
                path: format!("images/{}/{}.png", folder, state.name()),
                columns: clips.frames(state),
                rows: Facing::ALL.len() as u32,
                row,
            })
        }
    }
}

/// A registered sheet.
#[derive(Debug, Clone)]
pub struct SheetEntry {
    pub spec: SheetSpec,
    pub image: Handle<Image>,
    /// Cut once the image has loaded.
    pub layout: Option<Handle<TextureAtlasLayout>>,
}

impl SheetEntry {
    /// Atlas index of `frame` on this entry's row.
    pub fn index(&self, frame: u32) -> usize {
        let column = frame.min(self.spec.columns.saturating_sub(1));
        (self.spec.row * self.spec.columns + column) as usize
    }
}

/// Everything needed to draw one sprite.
#[derive(Debug, Clone)]
pub struct ResolvedSprite {
    pub image: Handle<Image>,
    pub atlas: TextureAtlas,
}

/// Lookup table built at startup.
#[derive(Resource, Default)]
pub struct SpriteTable {
    entries: HashMap<SpriteKey, SheetEntry>,
}

impl SpriteTable {
    pub fn insert(&mut self, key: SpriteKey, entry: SheetEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `key`, falling back to the idle sheet like enemies without
    /// a hurt clip do.
    pub fn entry(&self, key: SpriteKey) -> Result<&SheetEntry, SpriteLookupError> {
        let (kind, state, facing) = key;
        self.entries
            .get(&key)
            .or_else(|| self.entries.get(&(kind, AnimState::Idle, facing)))
            .ok_or(SpriteLookupError::Missing { kind, state, facing })
    }

    /// Resolve a draw request to an image and atlas region.
    pub fn resolve(
        &self,
        key: SpriteKey,
        frame: u32,
        asset_server: &AssetServer,
    ) -> Result<ResolvedSprite, SpriteLookupError> {
        let entry = self.entry(key)?;
        if let Some(LoadState::Failed(_)) = asset_server.get_load_state(entry.image.id()) {
            return Err(SpriteLookupError::Failed {
                path: entry.spec.path.clone(),
            });
        }
        let layout = entry.layout.clone().ok_or_else(|| SpriteLookupError::NotReady {
            path: entry.spec.path.clone(),
        })?;
        Ok(ResolvedSprite {
            image: entry.image.clone(),
            atlas: TextureAtlas {
                layout,
                index: entry.index(frame),
            },
        })
    }
}

/// Every key an actor can ask for.
fn all_keys() -> impl Iterator<Item = SpriteKey> {
    [ActorKind::Player, ActorKind::Minion, ActorKind::Boss]
        .into_iter()
        .flat_map(|kind| {
            AnimState::ALL.into_iter().flat_map(move |state| {
                Facing::ALL.into_iter().map(move |facing| (kind, state, facing))
            })
        })
}

/// Request every sheet and fill the table.
pub fn load_sprite_table(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut table = SpriteTable::default();
    let mut images: HashMap<String, Handle<Image>> = HashMap::default();

    for key in all_keys() {
        let (kind, state, facing) = key;
        let Some(spec) = sheet_spec(kind, state, facing) else {
            continue;
        };
        let image = images
            .entry(spec.path.clone())
            .or_insert_with(|| asset_server.load(spec.path.clone()))
            .clone();
        table.insert(key, SheetEntry { spec, image, layout: None });
    }

    info!("Sprite table: {} entries over {} sheets", table.len(), images.len());
    commands.insert_resource(table);
}

/// Cut atlas layouts for sheets whose images have arrived.
pub fn cut_loaded_sheets(
    mut table: ResMut<SpriteTable>,
    images: Res<Assets<Image>>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    mut cut: Local<HashMap<AssetId<Image>, Handle<TextureAtlasLayout>>>,
) {
    for entry in table.entries.values_mut() {
        if entry.layout.is_some() {
            continue;
        }
        let Some(image) = images.get(&entry.image) else {
            continue;
        };
        let layout = cut
            .entry(entry.image.id())
            .or_insert_with(|| {
                let size = image.size();
                let tile = UVec2::new(
                    size.x / entry.spec.columns.max(1),
                    size.y / entry.spec.rows.max(1),
                );
                debug!(
                    "cut {} into {}x{} frames of {:?}",
                    entry.spec.path, entry.spec.columns, entry.spec.rows, tile
                );
                layouts.add(TextureAtlasLayout::from_grid(
                    tile,
                    entry.spec.columns,
                    entry.spec.rows,
                    None,
                    None,
                ))
            })
            .clone();
        entry.layout = Some(layout);
    }
}

/// Placeholder colour and diameter when a sprite cannot be drawn.
pub fn placeholder(kind: ActorKind) -> (Color, f32) {
    match kind {
        ActorKind::Player => (Color::WHITE, 30.0),
        ActorKind::Minion => (Color::srgb(0.9, 0.1, 0.1), 40.0),
        ActorKind::Boss => (Color::srgb(0.9, 0.1, 0.1), 50.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_sheets_are_one_row_per_facing() {
        let spec = sheet_spec(ActorKind::Player, AnimState::Attack, Facing::Left).unwrap();
        assert_eq!(spec.path, "images/hero/attack_left_40x40.png");
        assert_eq!((spec.columns, spec.rows, spec.row), (7, 1, 0));
        assert!(sheet_spec(ActorKind::Player, AnimState::Hurt, Facing::Left).is_none());
    }

    #[test]
    fn enemy_rows_follow_down_up_left_right() {
        let spec = sheet_spec(ActorKind::Boss, AnimState::Death, Facing::Left).unwrap();
        assert_eq!(spec.path, "images/dracula/death.png");
        assert_eq!((spec.columns, spec.rows, spec.row), (11, 4, 2));

        let entry = SheetEntry {
            spec,
            image: Handle::default(),
            layout: None,
        };
        assert_eq!(entry.index(3), 25);
        assert_eq!(entry.index(40), 32);
    }

    #[test]
    fn missing_state_falls_back_to_idle() {
        let mut table = SpriteTable::default();
        let key = (ActorKind::Player, AnimState::Idle, Facing::Down);
        table.insert(
            key,
            SheetEntry {
                spec: sheet_spec(key.0, key.1, key.2).unwrap(),
                image: Handle::default(),
                layout: None,
            },
        );

        let hurt = table.entry((ActorKind::Player, AnimState::Hurt, Facing::Down)).unwrap();
        assert_eq!(hurt.spec.path, "images/hero/idle_down_40x40.png");

        let err = table
            .entry((ActorKind::Boss, AnimState::Run, Facing::Up))
            .unwrap_err();
        assert!(matches!(err, SpriteLookupError::Missing { kind: ActorKind::Boss, .. }));
    }
}
