use macroquad::prelude::*;

use flappy_evo::simulation::params::Params;
use flappy_evo::simulation::pipe::PipeKind;
use flappy_evo::simulation::sprite::Sprite;
use flappy_evo::simulation::world::GameWorld;

use crate::assets::Assets;

/// Width reserved on the right for the stats panel.
pub const PANEL_WIDTH: f32 = 300.0;

const OVERLAY_FONT_SIZE: f64 = 40.0;

/// Text drawn on top of the playfield.
pub struct Overlay {
    pub score: f64,
    pub high_score: f64,
    pub bird_id: usize,
    pub generation: u32,
}

fn field_scale(params: &Params) -> f32 {
    let scale_x = (screen_width() - PANEL_WIDTH).max(1.0) / params.field_width as f32;
    let scale_y = screen_height() / params.field_height as f32;
    scale_x.min(scale_y)
}

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for f64 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        *self as f32 * field_scale(params)
    }
}

impl ToScreen for (f64, f64) {
    type Output = Vec2;
    fn to_screen(&self, params: &Params) -> Vec2 {
        vec2(self.0.to_screen(params), self.1.to_screen(params))
    }
}

impl ToScreen for Sprite {
    type Output = Rect;
    fn to_screen(&self, params: &Params) -> Rect {
        Rect::new(
            self.left().to_screen(params),
            self.top().to_screen(params),
            self.width().to_screen(params),
            self.height().to_screen(params),
        )
    }
}

fn draw_sprite(rect: Rect, texture: Option<&Texture2D>, fallback: Color, flip_y: bool) {
    match texture {
        Some(texture) => draw_texture_ex(
            texture,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                flip_y,
                ..Default::default()
            },
        ),
        None => draw_rectangle(rect.x, rect.y, rect.w, rect.h, fallback),
    }
}

pub fn draw_world(world: &GameWorld, assets: &Assets, overlay: &Overlay) {
    let params = world.params();

    let field = Sprite::from_top_left(0.0, 0.0, params.field_width, params.field_height)
        .to_screen(params);
    draw_sprite(
        field,
        assets.background.as_ref(),
        Color::from_rgba(78, 192, 202, 255),
        false,
    );

    for pipe in &world.pipes {
        draw_sprite(
            pipe.sprite.to_screen(params),
            assets.pipe.as_ref(),
            Color::from_rgba(84, 168, 60, 255),
            pipe.kind == PipeKind::Top,
        );
    }

    draw_sprite(
        world.bird.sprite.to_screen(params),
        assets.bird.as_ref(),
        Color::from_rgba(250, 210, 60, 255),
        false,
    );

    for floor in &world.floors {
        draw_sprite(
            floor.sprite.to_screen(params),
            assets.floor.as_ref(),
            Color::from_rgba(222, 216, 149, 255),
            false,
        );
    }

    // Floor tiles scroll past the field edge; mask them out of the panel area.
    let right = params.field_width.to_screen(params);
    draw_rectangle(right, 0.0, screen_width() - right, screen_height(), BLACK);

    draw_overlay(params, assets, overlay);
}

fn draw_overlay(params: &Params, assets: &Assets, overlay: &Overlay) {
    let Some(font) = assets.font.as_ref() else {
        return;
    };

    let font_size = OVERLAY_FONT_SIZE.to_screen(params).max(1.0) as u16;
    let lines: [((f64, f64), String); 4] = [
        ((20.0, 10.0), format!("Bird ID: {}", overlay.bird_id)),
        ((20.0, 50.0), format!("Score: {}", overlay.score as i64)),
        ((20.0, 100.0), format!("High score: {}", overlay.high_score as i64)),
        ((20.0, 150.0), format!("Generation: {}", overlay.generation)),
    ];
    for ((x, top), text) in lines {
        // draw_text_ex positions the baseline, the layout above is by top edge
        let pos = (x, top + OVERLAY_FONT_SIZE).to_screen(params);
        draw_text_ex(
            &text,
            pos.x,
            pos.y,
            TextParams {
                font: Some(font),
                font_size,
                color: WHITE,
                ..Default::default()
            },
        );
    }
}
