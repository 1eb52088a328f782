use std::io::{Read, Write};
use flate2::{Compression, write::GzEncoder, read::GzDecoder};

use crate::error::{Error, Result};

/// 魔数常量 - 用于标识快照文件格式
pub const MAGIC_BYTES: &[u8] = b"WRDRB";

/// 当前写出的快照版本号 [主版本, 次版本]
pub const SNAPSHOT_VERSION: [u8; 2] = [1, 0];

/// 魔数 + 版本号 + 原始数据长度
const HEADER_LEN: usize = MAGIC_BYTES.len() + 2 + 4;

/// 将对象序列化为二进制格式
pub fn to_binary<T: serde::Serialize>(obj: &T) -> Result<Vec<u8>> {
    Ok(bincode::serde::encode_to_vec(obj, bincode::config::standard())?)
}

/// 从二进制格式反序列化对象
pub fn from_binary<T: for<'a> serde::de::Deserialize<'a>>(data: &[u8]) -> Result<T> {
    let (value, _) = bincode::serde::decode_from_slice(data, bincode::config::standard())?;
    Ok(value)
}

/// 将对象序列化为压缩的二进制格式
pub fn to_compressed<T: serde::Serialize>(obj: &T, version: [u8; 2]) -> Result<Vec<u8>> {
    let binary = to_binary(obj)?;
    let data_len = u32::try_from(binary.len())
        .map_err(|_| Error::Snapshot(format!("数据过大: {} 字节", binary.len())))?;

    // 写入魔数、版本号和原始数据大小
    let mut output = Vec::with_capacity(HEADER_LEN + binary.len() / 2);
    output.extend_from_slice(MAGIC_BYTES);
    output.extend_from_slice(&version);
    output.extend_from_slice(&data_len.to_le_bytes());

    let mut encoder = GzEncoder::new(output, Compression::best());
    encoder.write_all(&binary)?;
    let output = encoder.finish()?;

    log::debug!("快照压缩完成: 原始 {} 字节, 压缩后 {} 字节", binary.len(), output.len());
    Ok(output)
}

/// 从压缩的二进制格式反序列化对象，支持到当前主版本
pub fn from_compressed<T: for<'a> serde::de::Deserialize<'a>>(data: &[u8]) -> Result<T> {
    from_compressed_with_max_version(data, SNAPSHOT_VERSION[0])
}

/// 从压缩的二进制格式反序列化对象，允许指定支持的最大版本
pub fn from_compressed_with_max_version<T: for<'a> serde::de::Deserialize<'a>>(
    data: &[u8],
    max_version: u8,
) -> Result<T> {
    let (_, original_size) = read_header(data, max_version)?;

    let mut decoder = GzDecoder::new(&data[HEADER_LEN..]);
    let mut decompressed_data = Vec::new();
    decoder.read_to_end(&mut decompressed_data)?;

    // 检查解压后的数据大小
    if decompressed_data.len() != original_size {
        return Err(Error::Snapshot(format!(
            "解压后数据大小不匹配: 期望 {} 字节, 实际 {} 字节",
            original_size,
            decompressed_data.len()
        )));
    }

    from_binary(&decompressed_data)
}

/// 验证压缩数据头部是否有效，返回版本号
pub fn validate_compressed_data(data: &[u8]) -> Result<[u8; 2]> {
    validate_compressed_data_with_max_version(data, SNAPSHOT_VERSION[0])
}

/// 验证压缩数据头部是否有效，允许指定支持的最大版本
pub fn validate_compressed_data_with_max_version(data: &[u8], max_version: u8) -> Result<[u8; 2]> {
    read_header(data, max_version).map(|(version, _)| version)
}

// 解析快照头部: 返回版本号和原始数据大小
fn read_header(data: &[u8], max_version: u8) -> Result<([u8; 2], usize)> {
    if data.len() < HEADER_LEN {
        return Err(Error::Snapshot(format!("数据太短，无法解析: {} 字节", data.len())));
    }

    if &data[..MAGIC_BYTES.len()] != MAGIC_BYTES {
        return Err(Error::Snapshot("无效的文件格式：魔数不匹配".to_string()));
    }

    let version_offset = MAGIC_BYTES.len();
    let version = [data[version_offset], data[version_offset + 1]];
    if version[0] > max_version {
        return Err(Error::Snapshot(format!("不支持的版本: {}.{}", version[0], version[1])));
    }

    let size_offset = version_offset + 2;
    let mut size_bytes = [0u8; 4];
    size_bytes.copy_from_slice(&data[size_offset..HEADER_LEN]);
    let original_size = u32::from_le_bytes(size_bytes) as usize;

    Ok((version, original_size))
}
