pub mod category_codec;
