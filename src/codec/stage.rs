use crate::raster::PixelBuffer;
use image::ImageResult;
use std::fmt::Debug;

pub trait DecoderStage: Debug {
    fn decode(&mut self, data: &[u8]) -> ImageResult<PixelBuffer>;
}

pub trait EncoderStage: Debug {
    fn encode(&mut self, img: &PixelBuffer) -> ImageResult<Vec<u8>>;
}
