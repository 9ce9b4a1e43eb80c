/// Little endian byte order, shared by the image format, the heap and every
/// token payload.
pub type Endian = byteorder::LittleEndian;
