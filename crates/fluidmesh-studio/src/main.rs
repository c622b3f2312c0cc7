use anyhow::{Context, Result};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use fluidmesh_engine::core::{App, AppControl, FrameCtx};
use fluidmesh_engine::device::GpuInit;
use fluidmesh_engine::logging::{init_logging, LoggingConfig};
use fluidmesh_engine::render::FillRenderer;
use fluidmesh_engine::scene::DrawList;
use fluidmesh_engine::window::{Runtime, RuntimeConfig};
use fluidmesh_fx::{MeshGradient, MeshGradientConfig};

struct Studio {
    mesh: MeshGradient,
    draw_list: DrawList,
    renderer: FillRenderer,
}

impl Studio {
    fn new(config: MeshGradientConfig) -> Result<Self> {
        let mesh = MeshGradient::try_new(config).context("building mesh gradient")?;
        Ok(Self {
            mesh,
            draw_list: DrawList::new(),
            renderer: FillRenderer::new(),
        })
    }
}

impl App for Studio {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    logical_key: Key::Named(NamedKey::Escape),
                    state: ElementState::Pressed,
                    ..
                },
                ..
            } => {
                log::info!("escape pressed, closing");
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.draw_list.clear();
        let frame = self.mesh.draw(ctx.time.elapsed, ctx.window.viewport(), &mut self.draw_list);

        if ctx.time.frame_index % 600 == 0 {
            log::debug!(
                "frame {}: angles {:.1}/{:.1}",
                ctx.time.frame_index,
                frame.angles[0],
                frame.angles[1],
            );
        }

        let dl = &mut self.draw_list;
        let renderer = &mut self.renderer;
        ctx.render(frame.background, |rctx, target| {
            renderer.render(rctx, target, dl);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let studio = Studio::new(MeshGradientConfig::default())?;
    let config = RuntimeConfig {
        title: "Fluid Mesh Gradient".to_string(),
        initial_size: LogicalSize::new(1000.0, 800.0),
    };

    log::info!("starting {} ({}x{})", config.title, config.initial_size.width, config.initial_size.height);
    Runtime::run(config, GpuInit::default(), studio).context("fluidmesh runtime")
}
