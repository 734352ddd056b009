use std::sync::Arc;
use std::thread;

use addrparse_core::{
    parse, to_json, AddressParser, Catalog, ExtraRegionData, ParseOptions, ParseResult,
    RegionRecord, RegionStore, Strategy,
};

fn isolated_parser() -> AddressParser {
    AddressParser::new(Arc::new(RegionStore::new(Catalog::builtin().unwrap())))
}

fn parse_default(address: &str) -> ParseResult {
    parse(address, &ParseOptions::default()).unwrap()
}

fn record(code: &str, name: &str, province: Option<&str>, city: Option<&str>) -> RegionRecord {
    RegionRecord {
        code: code.to_string(),
        name: name.to_string(),
        province_code: province.map(str::to_string),
        city_code: city.map(str::to_string),
    }
}

#[test]
fn test_provincial_direct_county_city() {
    let result = parse_default("刘海江13311111111河南省省直辖县级行政区划济源市沁园路丹尼斯");
    assert_eq!(result.phone, "13311111111");
    assert_eq!(result.province, "河南省");
    assert_eq!(result.city, "济源市");
    assert_eq!(result.city_code, "419001");
    assert_eq!(result.area, "");
    assert_eq!(result.name, "刘海江");
    assert_eq!(result.detail, "沁园路丹尼斯");
}

#[test]
fn test_area_only_backfills_municipality() {
    let result = parse_default("王晓光 万州区 太平镇，13311111111");
    assert_eq!(result.name, "王晓光");
    assert_eq!(result.phone, "13311111111");
    assert_eq!(result.province, "重庆市");
    assert_eq!(result.city, "重庆市");
    assert_eq!(result.area, "万州区");
    assert_eq!(result.area_code, "500101");
    assert_eq!(result.detail, "太平镇");
}

#[test]
fn test_hong_kong() {
    let result = parse_default("香港特别行政区中西区皇后大道中100号");
    assert_eq!(result.province, "香港特别行政区");
    assert_eq!(result.city, "香港特别行政区");
    assert_eq!(result.area, "中西区");
    assert_eq!(result.province_code, "810000");
    assert_eq!(result.city_code, "810100");
    assert_eq!(result.area_code, "810101");
    assert_eq!(result.detail, "皇后大道中100号");
    assert_eq!(result.name, "");
}

#[test]
fn test_postal_code_and_municipality() {
    let result = parse_default("100080 北京市朝阳区建国路88号");
    assert_eq!(result.postal_code, "100080");
    assert_eq!(result.province, "北京市");
    assert_eq!(result.city, "北京市");
    assert_eq!(result.city_code, "110100");
    assert_eq!(result.area, "朝阳区");
    assert_eq!(result.detail, "建国路88号");
}

#[test]
fn test_short_street_stays_in_detail() {
    for strategy in [Strategy::PrefixUniqueness, Strategy::TreeDescent] {
        let options = ParseOptions::default().with_strategy(strategy);

        let beijing = parse("100080 北京市朝阳区某路", &options).unwrap();
        assert_eq!(beijing.postal_code, "100080");
        assert_eq!(beijing.province, "北京市");
        assert_eq!(beijing.area, "朝阳区");
        assert_eq!(beijing.detail, "某路");
        assert_eq!(beijing.name, "");

        let hong_kong = parse("香港特别行政区中西区XX街", &options).unwrap();
        assert_eq!(hong_kong.province, "香港特别行政区");
        assert_eq!(hong_kong.city, "香港特别行政区");
        assert_eq!(hong_kong.area, "中西区");
        assert_eq!(hong_kong.detail, "XX街");
        assert_eq!(hong_kong.name, "");
    }
}

#[test]
fn test_ambiguous_area_left_empty() {
    let result = parse_default("朝阳区建国路88号");
    assert_eq!(result.province, "");
    assert_eq!(result.city, "");
    assert_eq!(result.area, "");
    assert_eq!(result.area_code, "");
    assert_eq!(result.detail, "朝阳区建国路88号");

    let tree = parse(
        "朝阳区建国路88号",
        &ParseOptions::default().with_strategy(Strategy::TreeDescent),
    )
    .unwrap();
    assert_eq!(tree.province, "北京市");
    assert_eq!(tree.area_code, "110105");
    assert_eq!(tree.detail, "建国路88号");
}

#[test]
fn test_strategies_agree_on_full_address() {
    let address = "广东省广州市天河区体育西路191号 张三";
    let prefix = parse_default(address);
    let tree = parse(address, &ParseOptions::default().with_strategy(Strategy::TreeDescent)).unwrap();

    assert_eq!(prefix, tree);
    assert_eq!(prefix.province, "广东省");
    assert_eq!(prefix.city, "广州市");
    assert_eq!(prefix.area, "天河区");
    assert_eq!(prefix.name, "张三");
    assert_eq!(prefix.detail, "体育西路191号");
}

#[test]
fn test_fields_reconstruct_cleaned_input() {
    let result = parse_default("广东省广州市天河区体育西路191号 张三");
    let rebuilt = [
        result.province.as_str(),
        result.city.as_str(),
        result.area.as_str(),
        result.detail.as_str(),
        result.name.as_str(),
    ]
    .concat();
    assert_eq!(rebuilt, "广东省广州市天河区体育西路191号张三");
}

#[test]
fn test_chongqing_county() {
    let result = parse_default("重庆市县城口县葛城街道100号");
    assert_eq!(result.province, "重庆市");
    assert_eq!(result.city, "县");
    assert_eq!(result.city_code, "500200");
    assert_eq!(result.area, "城口县");
    assert_eq!(result.detail, "葛城街道100号");
    assert_eq!(result.name, "");
}

#[test]
fn test_honorific_and_labels() {
    let result = parse_default("收货人：李先生 地址：江苏省南京市鼓楼区中山北路1号");
    assert_eq!(result.name, "李先生");
    assert_eq!(result.province, "江苏省");
    assert_eq!(result.city, "南京市");
    assert_eq!(result.area, "鼓楼区");
    assert_eq!(result.area_code, "320106");
    assert_eq!(result.detail, "中山北路1号");
}

#[test]
fn test_parenthetical_is_not_a_name() {
    let result = parse_default("张三(公司) 北京市海淀区中关村大街27号");
    assert_eq!(result.name, "");
    assert_eq!(result.area, "海淀区");
    assert!(result.detail.contains("张三(公司)"));
    assert!(result.detail.contains("中关村大街27号"));
}

#[test]
fn test_name_max_length() {
    let address = "上海市浦东新区世纪大道100号 欧阳娜娜";

    let result = parse_default(address);
    assert_eq!(result.name, "欧阳娜娜");
    assert_eq!(result.city, "上海市");
    assert_eq!(result.area, "浦东新区");

    let short = parse(address, &ParseOptions::default().with_name_max_length(3)).unwrap();
    assert_eq!(short.name, "");
    assert!(short.detail.contains("欧阳娜娜"));
}

#[test]
fn test_extra_stop_words() {
    let options = ParseOptions::default().with_stop_words(["备注"]);
    let result = parse("广东省广州市天河区体育西路191号 备注张三", &options).unwrap();
    assert_eq!(result.name, "张三");
    assert_eq!(result.detail, "体育西路191号");
}

#[test]
fn test_extra_region_data_extends_store() {
    let parser = isolated_parser();
    let extra = ExtraRegionData {
        province: Some(vec![record("990000", "测试省", None, None)]),
        city: Some(vec![record("990100", "样例市", Some("990000"), None)]),
        area: Some(vec![record("990101", "示范区", Some("990000"), Some("990100"))]),
    };

    let options = ParseOptions::default().with_extra_region_data(extra);
    let result = parser.parse("测试省样例市示范区幸福路8号", &options).unwrap();
    assert_eq!(result.province_code, "990000");
    assert_eq!(result.city_code, "990100");
    assert_eq!(result.area_code, "990101");
    assert_eq!(result.detail, "幸福路8号");

    // 追加是持久的
    let again = parser
        .parse("测试省样例市示范区幸福路8号", &ParseOptions::default())
        .unwrap();
    assert_eq!(again.area, "示范区");
}

#[test]
fn test_extra_region_data_without_province_is_skipped() {
    let parser = isolated_parser();
    let extra = ExtraRegionData {
        province: None,
        city: Some(vec![record("440199", "样例市", Some("440000"), None)]),
        area: None,
    };

    let options = ParseOptions::default().with_extra_region_data(extra);
    let result = parser.parse("样例市幸福路8号", &options).unwrap();
    assert_eq!(result.city, "");
    assert_eq!(result.city_code, "");
}

#[test]
fn test_options_from_json() {
    let options = ParseOptions::from_json_str(
        r#"{
            "strategy": "treeDescent",
            "nameMaxLength": 3,
            "extraRegionData": {
                "province": [{"code": "990000", "name": "测试省"}],
                "city": [{"code": "990100", "name": "样例市", "provinceCode": "990000"}]
            }
        }"#,
    )
    .unwrap();

    let result = isolated_parser().parse("测试省样例市幸福路8号", &options).unwrap();
    assert_eq!(result.province, "测试省");
    assert_eq!(result.city, "样例市");
    assert_eq!(result.detail, "幸福路8号");
}

#[test]
fn test_custom_dataset() {
    let parser = AddressParser::from_dataset_json(
        r#"[{"code":"990000","name":"测试省","children":[
            {"code":"990100","name":"样例市","children":[{"code":"990101","name":"示范区"}]}
        ]}]"#,
    )
    .unwrap();

    let result = parser.parse("测试省样例市示范区幸福路8号", &ParseOptions::default()).unwrap();
    assert_eq!(result.area_code, "990101");
    assert_eq!(parser.parse("北京市朝阳区", &ParseOptions::default()).unwrap().province, "");
}

#[test]
fn test_empty_input_is_empty_object() {
    assert!(parse("", &ParseOptions::default()).is_none());
    assert_eq!(to_json(None).unwrap().to_string(), "{}");

    let value = to_json(Some(&parse_default("100080 北京市朝阳区建国路88号"))).unwrap();
    assert_eq!(value["postalCode"], "100080");
    assert_eq!(value["areaCode"], "110105");
}

#[test]
fn test_parse_during_concurrent_extension() {
    let parser = isolated_parser();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = parser.clone();
            thread::spawn(move || {
                let code = format!("99{}000", i);
                let extra = ExtraRegionData {
                    province: Some(vec![record(&code, &format!("并发{}省", i), None, None)]),
                    city: None,
                    area: None,
                };
                let options = ParseOptions::default().with_extra_region_data(extra);
                parser.parse("100080 北京市朝阳区建国路88号", &options).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.area_code, "110105");
    }

    let snapshot = parser.store().snapshot();
    assert_eq!(snapshot.records(addrparse_core::RegionLevel::Province).len(), 38);
}
