//! Colors

use std::ops::Deref;
use crate::Color;

/// Color as Red, Green, and Blue
///
/// Channel depth is set by the pixel format the color is used with.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Red
    pub fn r(&self) -> u8 { self.0[0] }
    /// Green
    pub fn g(&self) -> u8 { self.0[1] }
    /// Blue
    pub fn b(&self) -> u8 { self.0[2] }
}

impl Color for Rgb {
    fn channels(&self) -> &[u8] {
        &self.0
    }
    fn channels_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

/// Gray scale
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Gray(pub u8);

impl Gray {
    /// Create a new gray scale value
    pub fn new(g: u8) -> Self {
        Gray(g)
    }
}
impl Deref for Gray {
    type Target = u8;
    fn deref(&self) -> &u8 {
        &self.0
    }
}
impl Color for Gray {
    fn channels(&self) -> &[u8] {
        std::slice::from_ref(&self.0)
    }
    fn channels_mut(&mut self) -> &mut [u8] {
        std::slice::from_mut(&mut self.0)
    }
}

impl From<Gray> for Rgb {
    fn from(c: Gray) -> Rgb {
        Rgb::new(c.0, c.0, c.0)
    }
}
