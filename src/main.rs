use screenplay_writer::{Block, BlockType, Conf, FountainParser, Paginator, serialize};
use std::fs;
use std::env;
use unicode_segmentation::UnicodeSegmentation;

/// 每行高度（像素）
const LINE_HEIGHT: f32 = 16.0;

/// 粗略的每行字符数，用来代替界面上的实际测量
fn chars_per_line(block_type: BlockType) -> usize {
    match block_type {
        BlockType::Dialogue => 35,
        BlockType::Parenthetical => 25,
        BlockType::Character => 38,
        _ => 60,
    }
}

fn estimate_height(block: &Block) -> f32 {
    let width = chars_per_line(block.block_type);
    let graphemes = block.text.trim().graphemes(true).count().max(1);
    let lines = (graphemes + width - 1) / width;
    lines as f32 * LINE_HEIGHT
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <fountain_file> [config.json]", args[0]);
        return;
    }

    let file_path = &args[1];

    let conf = match args.get(2) {
        Some(conf_path) => match fs::read_to_string(conf_path).map(|s| Conf::from_json(&s)) {
            Ok(Ok(conf)) => conf,
            Ok(Err(e)) => {
                println!("配置文件格式错误: {}", e);
                return;
            }
            Err(e) => {
                println!("读取配置失败: {}", e);
                return;
            }
        },
        None => Conf::default(),
    };

    match fs::read_to_string(file_path) {
        Ok(content) => {
            let result = FountainParser::new().parse(&content);

            let pagination = Paginator::new(conf.print_profile()).paginate(&result.blocks, &estimate_height);

            println!("解析完成！");
            println!("行数: {}", result.line_count);
            println!("块数量: {}", result.blocks.len());
            for t in BlockType::ALL {
                let n = result.blocks.iter().filter(|b| b.block_type == t).count();
                if n > 0 {
                    println!("  {}: {}", t.short_label(), n);
                }
            }
            println!("场景数量: {}", result.properties.scenes.len());
            println!("角色: {}", result.properties.character_names().join(", "));
            println!("预计页数({}): {}", conf.page_size, pagination.page_count);

            let out_path = format!("{}.normalized.{}", file_path, conf.file_extension);
            match fs::write(&out_path, serialize(&result.blocks)) {
                Ok(_) => println!("规范化输出已保存到: {}", out_path),
                Err(e) => println!("写入失败: {}", e),
            }
        },
        Err(e) => {
            println!("读取文件失败: {}", e);
        }
    }
}
