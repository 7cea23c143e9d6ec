use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

pub const TILE_PALETTE: [Rgba; 9] = [
    Rgba::rgb(237, 229, 218), // cream
    Rgba::rgb(238, 225, 201), // sand
    Rgba::rgb(243, 178, 122), // apricot
    Rgba::rgb(246, 150, 101), // light orange
    Rgba::rgb(247, 124, 95),  // coral
    Rgba::rgb(247, 95, 59),   // red-orange
    Rgba::rgb(237, 208, 115), // pale gold
    Rgba::rgb(237, 204, 99),  // gold
    Rgba::rgb(236, 202, 80),  // deep gold
];

pub fn random_tile_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    TILE_PALETTE[rng.gen_range(0..TILE_PALETTE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_color_comes_from_palette() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let c = random_tile_color(&mut rng);
            assert!(TILE_PALETTE.contains(&c));
        }
    }

    #[test]
    fn converts_to_unit_range() {
        let c = Rgba::rgb(255, 0, 51).to_mq_color();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }
}
