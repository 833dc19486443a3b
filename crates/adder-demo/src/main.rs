use adder_engine::logging::{init_logging, LoggingConfig};
use adder_ui::prelude::*;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    Application::new()
        .title("Adder")
        .size(640.0, 480.0)
        .font(load_font())
        // ── commands ──────────────────────────────────────────────────────
        .on_command("spin", |ui, _| {
            if let Some(label) = ui.get_as_mut::<Label>("welcome") {
                label.rotate(15.0);
            }
        })
        .on_command("reset", |ui, fonts| {
            if let Some(label) = ui.get_as_mut::<Label>("welcome") {
                label.reset_rotation();
                label.set_text("Welcome to Adder", fonts.rasterizer());
            }
        })
        .on_command("flip", |ui, fonts| {
            if let Some(label) = ui.get_as_mut::<Label>("welcome") {
                label.set_text("Hold Start to spin me", fonts.rasterizer());
            }
        })
        .on_command("quit", |ui, _| {
            log::info!("quit requested");
            ui.request_exit();
        })
        // ── components ────────────────────────────────────────────────────
        .run(|ui, fonts| {
            let text = fonts.rasterizer();
            let font = fonts.sized(30.0);

            let welcome = Label::builder("welcome", "Welcome to Adder", font)
                .position(Vec2::new(320.0, 110.0))
                .anchor(Anchor::Center)
                .foreground((255u8, 255, 255))
                .build(text)?;

            let start = Button::builder("btn1", "Start", font)
                .position(Vec2::new(100.0, 200.0))
                .size(200, 75)
                .foreground((255u8, 255, 255))
                .background((34u8, 177, 76))
                .on_click(|out| out.push("spin"))
                .event(ONDOUBLECLICK, |out| out.push("flip"))
                .menu_entry("Reset", |out| out.push("reset"))
                .menu_entry("Quit", |out| out.push("quit"))
                .build(text)?;

            let quit = Button::builder("quit", "Quit", font)
                .position(Vec2::new(320.0, 200.0))
                .size(200, 75)
                .foreground((255u8, 255, 255))
                .background((32u8, 64, 255))
                .on_click(|out| out.push("quit"))
                .build(text)?;

            // Buttons first: they win hover over the label if it spins into them.
            ui.register(start)?;
            ui.register(quit)?;
            ui.register(welcome)?;
            Ok(())
        })
}

fn load_font() -> Vec<u8> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .unwrap_or_default()
}
