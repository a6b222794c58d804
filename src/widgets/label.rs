//! Passive widgets: label and image.

use crate::context::Context;
use crate::geometry::Rect;
use crate::platform::{Platform, TextureId};

impl<P: Platform> Context<P> {
    /// Static text. Styled as `label`, caption as `label-text`.
    pub fn label(&mut self, id: Option<&str>, rect: Rect, text: &str) {
        self.begin_passive("label", id, rect);
        self.draw_frame(rect);
        self.push_element("text");
        self.draw_style_text(text, rect);
        self.pop_element();
        self.end_control();
    }

    /// Draw `src` of `texture` stretched over `rect`. `None` uses the whole
    /// texture.
    pub fn image(&mut self, id: Option<&str>, rect: Rect, texture: TextureId, src: Option<Rect>) {
        self.begin_passive("image", id, rect);
        self.push_texture(texture);
        self.draw_frame(rect);
        let src = src.unwrap_or_else(|| Rect::from_size(self.platform().texture_size(texture)));
        self.draw_image(src, rect);
        self.pop_texture();
        self.end_control();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::context::{Context, ContextConfig};
    use crate::draw::Element;
    use crate::geometry::{Color, Rect, Vec2};
    use crate::platform::{Platform, WindowId};
    use crate::testing::{commands_to_string, HeadlessPlatform};

    fn ctx() -> (Context<HeadlessPlatform>, WindowId) {
        let mut ctx = Context::new(HeadlessPlatform::new(), ContextConfig::default()).unwrap();
        let w = ctx.create_window("main", Rect::new(0.0, 0.0, 200.0, 100.0), None);
        (ctx, w)
    }

    #[test]
    fn label_draws_left_aligned_text() {
        let (mut ctx, w) = ctx();
        ctx.begin();
        ctx.push_window(w);
        ctx.label(Some("title"), Rect::new(10.0, 10.0, 100.0, 20.0), "Hello");
        ctx.pop_window();
        insta::assert_snapshot!(
            commands_to_string(ctx.end()),
            @r#"w1 z=1 text "Hello" 10,10 100x20 color=#000000FF"#
        );
    }

    #[test]
    fn disabled_label_is_gray() {
        let (mut ctx, w) = ctx();
        ctx.begin();
        ctx.push_window(w);
        ctx.push_disable(true);
        ctx.label(None, Rect::new(0.0, 0.0, 50.0, 20.0), "off");
        ctx.pop_disable();
        ctx.pop_window();
        match &ctx.end()[0].element {
            Element::Text(t) => assert_eq!(t.color, Color::rgb(128, 128, 128)),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn image_defaults_to_whole_texture() {
        let (mut ctx, w) = ctx();
        ctx.platform_mut().set_texture_size("logo.png", Vec2::new(64.0, 32.0));
        let texture = ctx.platform_mut().create_texture("logo.png");
        ctx.begin();
        ctx.push_window(w);
        ctx.image(None, Rect::new(0.0, 0.0, 32.0, 16.0), texture, None);
        ctx.image(None, Rect::new(40.0, 0.0, 8.0, 8.0), texture, Some(Rect::new(8.0, 8.0, 8.0, 8.0)));
        ctx.pop_window();
        insta::assert_snapshot!(commands_to_string(ctx.end()), @r"
        w1 z=1 image t1 0,0 32x16
        w1 z=2 image t1 40,0 8x8
        ");
    }

    #[test]
    fn image_restores_texture() {
        let (mut ctx, w) = ctx();
        let texture = ctx.platform_mut().create_texture("a.png");
        ctx.begin();
        ctx.push_window(w);
        ctx.image(None, Rect::new(0.0, 0.0, 1.0, 1.0), texture, None);
        assert_eq!(ctx.current_texture(), Default::default());
        ctx.pop_window();
        ctx.end();
    }
}
