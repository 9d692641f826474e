//! TILLY-2D demo
//!
//! A panel with anchored children spins in the middle of the window while
//! boxes and orbs bounce around it. Overlapping colliders flash red, clicking
//! an orb pops it, clicking a box toggles its selection outline and a right
//! click spawns a new orb under the cursor.

use std::collections::HashMap;

use macroquad::prelude::*;

use tilly2d::collision::Shape;
use tilly2d::{
    Anchor, Behaviour, Bounds, Component, EngineConfig, NodeMut, Pointer, PointerButton,
    PointerSample, Scene, SceneError, SceneNode, SpriteDraw, Surface, VERSION,
};

const CONFIG_PATH: &str = "tilly2d.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("TILLY-2D v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

// =============================================================================
// Textures
// =============================================================================

/// White square with a darker one-pixel rim, tinted per node at draw time.
fn square_pixels(size: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let rim = x == 0 || y == 0 || x == size - 1 || y == size - 1;
            let shade = if rim { 150 } else { 255 };
            pixels.extend_from_slice(&[shade, shade, shade, 255]);
        }
    }
    pixels
}

/// White disc on a transparent background.
fn disc_pixels(size: usize) -> Vec<u8> {
    let radius = size as f32 * 0.5;
    let mut pixels = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let alpha = if dx * dx + dy * dy <= radius * radius { 255 } else { 0 };
            pixels.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }
    pixels
}

fn make_texture(size: usize, pixels: &[u8]) -> Texture2D {
    let texture = Texture2D::from_rgba8(size as u16, size as u16, pixels);
    texture.set_filter(FilterMode::Nearest);
    texture
}

fn build_textures() -> HashMap<String, Texture2D> {
    let mut textures = HashMap::new();
    textures.insert("panel".to_string(), make_texture(64, &square_pixels(64)));
    textures.insert("block".to_string(), make_texture(16, &square_pixels(16)));
    textures.insert("orb".to_string(), make_texture(32, &disc_pixels(32)));
    textures
}

/// Draws scene sprites with macroquad, centred on their world position.
struct Screen<'a> {
    textures: &'a HashMap<String, Texture2D>,
}

impl Surface for Screen<'_> {
    fn draw_sprite(&mut self, sprite: &SpriteDraw) {
        let Some(texture) = self.textures.get(&sprite.texture) else {
            log::warn!("no GPU texture for '{}'", sprite.texture);
            return;
        };
        let mut colour = sprite.colour;
        colour.a *= sprite.opacity;

        let top_left = sprite.position - sprite.size * 0.5;
        draw_texture_ex(
            texture,
            top_left.x,
            top_left.y,
            colour,
            DrawTextureParams {
                dest_size: Some(sprite.size),
                source: sprite.source,
                rotation: sprite.rotation,
                pivot: Some(sprite.position),
                ..Default::default()
            },
        );
    }
}

// =============================================================================
// Behaviours
// =============================================================================

/// Drifts at a constant velocity and reflects off the world bounds.
struct Bouncer {
    velocity: Vec2,
    bounds: Bounds,
    tint: Color,
}

impl Behaviour for Bouncer {
    fn on_update(&mut self, node: &mut NodeMut<'_>, dt: f32) -> Result<(), SceneError> {
        let node = node.node_mut()?;
        let half = node.size * 0.5;
        let min = vec2(self.bounds.x, self.bounds.y) + half;
        let max = vec2(self.bounds.x + self.bounds.w, self.bounds.y + self.bounds.h) - half;

        let mut position = node.local_position() + self.velocity * dt;
        if position.x < min.x || position.x > max.x {
            self.velocity.x = -self.velocity.x;
            position.x = position.x.clamp(min.x, max.x.max(min.x));
        }
        if position.y < min.y || position.y > max.y {
            self.velocity.y = -self.velocity.y;
            position.y = position.y.clamp(min.y, max.y.max(min.y));
        }

        node.set_local_position(position);
        node.colour = self.tint;
        Ok(())
    }
}

/// Turns its node at a fixed rate.
struct Spinner {
    speed: f32,
}

impl Behaviour for Spinner {
    fn on_update(&mut self, node: &mut NodeMut<'_>, dt: f32) -> Result<(), SceneError> {
        node.node_mut()?.rotate(self.speed * dt);
        Ok(())
    }
}

/// Bounces like a `Bouncer` and dies when clicked.
struct Orb {
    bouncer: Bouncer,
}

impl Behaviour for Orb {
    fn on_handle_input(
        &mut self,
        node: &mut NodeMut<'_>,
        _dt: f32,
        _pointer: &Pointer,
    ) -> Result<(), SceneError> {
        let clicked = node
            .node()?
            .collider()
            .is_some_and(|collider| collider.interaction().is_clicked);
        if clicked {
            log::info!("popped '{}'", node.node()?.name());
            node.die()?;
        }
        Ok(())
    }

    fn on_update(&mut self, node: &mut NodeMut<'_>, dt: f32) -> Result<(), SceneError> {
        self.bouncer.on_update(node, dt)
    }
}

// =============================================================================
// Scene setup
// =============================================================================

fn orb(position: Vec2, velocity: Vec2, bounds: Bounds) -> SceneNode {
    SceneNode::new("orb")
        .with_name("orb")
        .at(position)
        .with_size(vec2(24.0, 24.0))
        .with_circle_collider(12.0)
        .with_behaviour(Orb { bouncer: Bouncer { velocity, bounds, tint: SKYBLUE } })
}

fn populate(scene: &mut Scene) -> Result<(), SceneError> {
    let bounds = scene.config().world_bounds;
    let centre = vec2(bounds.x + bounds.w * 0.5, bounds.y + bounds.h * 0.5);

    let panel = scene.add(
        None,
        SceneNode::new("panel")
            .with_name("panel")
            .at(centre)
            .with_size(vec2(240.0, 160.0))
            .with_colour(DARKGRAY)
            .without_collider()
            .with_behaviour(Spinner { speed: 0.3 }),
    )?;

    let corners = [
        (Anchor::TOP_LEFT, ORANGE),
        (Anchor::TOP_RIGHT, GOLD),
        (Anchor::BOTTOM_LEFT, LIME),
        (Anchor::BOTTOM_RIGHT, PINK),
    ];
    for (anchor, colour) in corners {
        scene.add(
            Some(panel),
            SceneNode::new("block")
                .with_size(vec2(24.0, 24.0))
                .anchored(anchor, 0)
                .with_colour(colour),
        )?;
    }
    scene.add(
        Some(panel),
        SceneNode::new("block")
            .with_name("badge")
            .with_size(vec2(24.0, 24.0))
            .anchored(Anchor::TOP_CENTRE, 1)
            .with_colour(WHITE),
    )?;

    let speeds = [vec2(140.0, 90.0), vec2(-110.0, 130.0), vec2(80.0, -150.0), vec2(-160.0, -70.0)];
    for (i, velocity) in speeds.iter().enumerate() {
        let x = bounds.x + 120.0 + i as f32 * 280.0;
        scene.add(
            None,
            SceneNode::new("block")
                .with_name(format!("box-{}", i))
                .at(vec2(x, bounds.y + 100.0))
                .with_size(vec2(40.0, 40.0))
                .with_behaviour(Bouncer { velocity: *velocity, bounds, tint: BEIGE }),
        )?;
        scene.add(None, orb(vec2(x, bounds.y + bounds.h - 100.0), -*velocity, bounds))?;
    }
    Ok(())
}

/// Outline hovered and selected colliders.
fn draw_interaction(scene: &Scene) {
    for (_, node) in scene.iter() {
        let Some(collider) = node.collider() else {
            continue;
        };
        let interaction = collider.interaction();
        let colour = if interaction.is_selected {
            YELLOW
        } else if interaction.is_mouse_over {
            WHITE
        } else {
            continue;
        };
        match collider.shape() {
            Shape::Box(b) => draw_rectangle_lines(b.position.x, b.position.y, b.width, b.height, 2.0, colour),
            Shape::Circle(c) => draw_circle_lines(c.position.x, c.position.y, c.radius, 2.0, colour),
        }
    }
}

fn sample_pointer() -> PointerSample {
    let (x, y) = mouse_position();
    PointerSample {
        position: vec2(x, y),
        left_down: is_mouse_button_down(MouseButton::Left),
        middle_down: is_mouse_button_down(MouseButton::Middle),
        right_down: is_mouse_button_down(MouseButton::Right),
        scroll: mouse_wheel().1,
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = match EngineConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load {}: {}, using defaults", CONFIG_PATH, e);
            EngineConfig::default()
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter.as_str()))
        .init();

    let textures = build_textures();
    let sizes: HashMap<String, Vec2> = textures
        .iter()
        .map(|(name, texture)| (name.clone(), vec2(texture.width(), texture.height())))
        .collect();

    let step = config.fixed_timestep.max(1.0 / 240.0);
    let bounds = config.world_bounds;
    let mut scene = Scene::new(config, sizes);

    let setup = populate(&mut scene)
        .and_then(|_| scene.load())
        .and_then(|_| scene.initialise());
    if let Err(e) = setup {
        log::error!("scene setup failed: {}", e);
        return;
    }
    log::info!("TILLY-2D v{} running with {} nodes", VERSION, scene.len());

    let mut pointer = Pointer::new();
    let mut accumulator = 0.0f32;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        pointer.advance(sample_pointer());
        if pointer.is_clicked(PointerButton::Right) {
            let at = pointer.position();
            let velocity = vec2(
                macroquad::rand::gen_range(-150.0, 150.0),
                macroquad::rand::gen_range(-150.0, 150.0),
            );
            if let Err(e) = scene.add(None, orb(at, velocity, bounds)) {
                log::error!("spawn failed: {}", e);
            }
        }

        accumulator += get_frame_time().min(0.25);
        let mut result = Ok(());
        while accumulator >= step {
            accumulator -= step;
            result = scene.handle_input(step, &pointer).and_then(|_| scene.update(step));
            if result.is_err() {
                break;
            }
            scene.collide();
            // Edges belong to the first step of the frame only
            pointer.flush();
        }

        let hits: Vec<_> = scene.events.drain().collect();
        for hit in hits {
            for id in [hit.a, hit.b] {
                if let Some(node) = scene.node_mut(id) {
                    node.colour = RED;
                }
            }
        }

        clear_background(Color::from_rgba(30, 30, 35, 255));
        let result = result.and_then(|_| scene.draw(&mut Screen { textures: &textures }));
        if let Err(e) = result {
            log::error!("frame aborted: {}", e);
            break;
        }
        draw_interaction(&scene);
        draw_text(
            &format!("{} nodes  {} fps", scene.len(), get_fps()),
            12.0,
            24.0,
            20.0,
            LIGHTGRAY,
        );

        next_frame().await;
    }

    if let Err(e) = scene.die() {
        log::error!("shutdown failed: {}", e);
    }
}
