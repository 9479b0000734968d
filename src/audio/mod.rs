//! Audio domain: background music per screen and one-shot combat cues.
//!
//! Every track is optional. Missing files are reported once at startup and
//! then silently skipped.

use bevy::audio::{AudioPlayer, PlaybackSettings, Volume};
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::path::Path;

use crate::combat::{SoundCue, SoundCueEvent};
use crate::core::AppState;

const MUSIC_VOLUME: f32 = 0.3;
const CUE_VOLUME: f32 = 0.5;

const MENU_MUSIC_PATH: &str = "audio/music/menu.ogg";
const MATCH_MUSIC_PATH: &str = "audio/music/match.ogg";

/// Asset path for a combat cue.
pub fn cue_path(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Slash => "audio/fx/slash.ogg",
        SoundCue::Block => "audio/fx/block.ogg",
        SoundCue::Fireball => "audio/fx/fireball.ogg",
    }
}

/// Loaded audio handles; `None` where the file is absent.
#[derive(Resource, Debug, Default)]
pub struct AudioCatalog {
    pub menu_music: Option<Handle<AudioSource>>,
    pub match_music: Option<Handle<AudioSource>>,
    pub slash: Option<Handle<AudioSource>>,
    pub block: Option<Handle<AudioSource>>,
    pub fireball: Option<Handle<AudioSource>>,
}

impl AudioCatalog {
    pub fn cue(&self, cue: SoundCue) -> Option<Handle<AudioSource>> {
        match cue {
            SoundCue::Slash => self.slash.clone(),
            SoundCue::Block => self.block.clone(),
            SoundCue::Fireball => self.fireball.clone(),
        }
    }
}

/// Marker for the looping menu track
#[derive(Component)]
pub struct MenuMusic;

/// Marker for the looping match track
#[derive(Component)]
pub struct MatchMusic;

pub struct AudioCuesPlugin;

impl Plugin for AudioCuesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioCatalog>()
            .add_systems(Startup, load_audio_catalog)
            .add_systems(OnEnter(AppState::Intro), start_menu_music)
            .add_systems(OnEnter(AppState::Instructions), start_menu_music)
            .add_systems(
                OnEnter(AppState::Match),
                (stop_menu_music, start_match_music),
            )
            .add_systems(Update, play_sound_cues.run_if(in_state(AppState::Match)));
    }
}

fn load_optional(asset_server: &AssetServer, path: &str) -> Option<Handle<AudioSource>> {
    if Path::new("assets").join(path).exists() {
        Some(asset_server.load(path.to_string()))
    } else {
        warn!("Audio file assets/{} not found; it will not play", path);
        None
    }
}

fn load_audio_catalog(mut catalog: ResMut<AudioCatalog>, asset_server: Res<AssetServer>) {
    *catalog = AudioCatalog {
        menu_music: load_optional(&asset_server, MENU_MUSIC_PATH),
        match_music: load_optional(&asset_server, MATCH_MUSIC_PATH),
        slash: load_optional(&asset_server, cue_path(SoundCue::Slash)),
        block: load_optional(&asset_server, cue_path(SoundCue::Block)),
        fireball: load_optional(&asset_server, cue_path(SoundCue::Fireball)),
    };
}

/// The menu track keeps looping between the intro and help screens.
fn start_menu_music(
    mut commands: Commands,
    catalog: Res<AudioCatalog>,
    playing: Query<(), With<MenuMusic>>,
) {
    if !playing.is_empty() {
        return;
    }
    let Some(track) = catalog.menu_music.clone() else {
        return;
    };
    commands.spawn((
        MenuMusic,
        AudioPlayer::new(track),
        PlaybackSettings {
            volume: Volume::Linear(MUSIC_VOLUME),
            ..PlaybackSettings::LOOP
        },
    ));
}

fn stop_menu_music(mut commands: Commands, query: Query<Entity, With<MenuMusic>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

fn start_match_music(mut commands: Commands, catalog: Res<AudioCatalog>) {
    let Some(track) = catalog.match_music.clone() else {
        return;
    };
    commands.spawn((
        MatchMusic,
        AudioPlayer::new(track),
        PlaybackSettings {
            volume: Volume::Linear(MUSIC_VOLUME),
            ..PlaybackSettings::LOOP
        },
        DespawnOnExit(AppState::Match),
    ));
}

fn play_sound_cues(
    mut commands: Commands,
    mut events: MessageReader<SoundCueEvent>,
    catalog: Res<AudioCatalog>,
) {
    for event in events.read() {
        let Some(source) = catalog.cue(event.cue) else {
            continue;
        };
        commands.spawn((
            AudioPlayer::new(source),
            PlaybackSettings {
                volume: Volume::Linear(CUE_VOLUME),
                ..PlaybackSettings::DESPAWN
            },
        ));
    }
}
