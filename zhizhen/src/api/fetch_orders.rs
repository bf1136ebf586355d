//! Stub order fixture
//!
//! Replace with the real API client once the booking server ships.

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{EventAddress, EventTimeslot, Order, OrderPay};

use super::OrderSource;

/// In-memory fixture source used while the server API is stubbed out
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureOrderSource;

#[async_trait]
impl OrderSource for FixtureOrderSource {
    async fn fetch_orders(&self) -> AppResult<Vec<Order>> {
        Ok(fixture_orders())
    }
}

fn order(
    client: &str,
    contact: &str,
    model_reviewer: &str,
    event_date: &str,
    timeslot: (&str, &str),
    address: (&str, &str),
    pay: (&str, &str),
    hair_style: &str,
    photos: &[&str],
    requirements: &str,
    description: &str,
) -> Order {
    Order {
        client: client.to_string(),
        contact: contact.to_string(),
        model_reviewer: model_reviewer.to_string(),
        event_date: event_date.to_string(),
        event_timeslot: EventTimeslot {
            start_time: timeslot.0.to_string(),
            end_time: timeslot.1.to_string(),
        },
        event_address: EventAddress {
            city: address.0.to_string(),
            street: address.1.to_string(),
        },
        pay: OrderPay {
            agent_commission: pay.0.to_string(),
            model_pay: pay.1.to_string(),
        },
        target_hair_style_description: hair_style.to_string(),
        target_hair_style_photos: photos.iter().map(|p| p.to_string()).collect(),
        model_requirements: requirements.to_string(),
        event_description: description.to_string(),
    }
}

/// The 10 sample bookings
pub fn fixture_orders() -> Vec<Order> {
    vec![
        order(
            "施华蔻",
            "娃娃",
            "John Doe",
            "2025-08-04",
            ("09:00", "17:00"),
            ("上海", "静安区南京西路1000号"),
            ("500", "50-200"),
            "头发长度在肩膀以上，颜色自然，适合拍摄时尚杂志",
            &["photo1.jpg", "photo2.jpg"],
            "女性，年龄在18-30岁之间，身高160cm以上，形象气质佳",
            "施华蔻新产品发布会模特招募",
        ),
        order(
            "香奈儿",
            "小雅",
            "Jane Smith",
            "2025-08-04",
            ("10:00", "18:00"),
            ("上海", "黄浦区淮海中路300号"),
            ("800", "200-500"),
            "长直发，发色乌黑，气质优雅",
            &["chanel_ref1.jpg"],
            "女性，身高168cm以上，有T台经验优先",
            "香奈儿秋季新品静态展模特",
        ),
        order(
            "欧莱雅",
            "陈琳",
            "John Doe",
            "2025-08-05",
            ("08:30", "16:30"),
            ("北京", "朝阳区建国路88号"),
            ("500", "100-300"),
            "卷发或波浪发，发量充足",
            &["loreal_a.jpg", "loreal_b.jpg", "loreal_c.jpg"],
            "不限性别，年龄20-35岁，镜头表现力强",
            "欧莱雅染发系列广告拍摄",
        ),
        order(
            "兰蔻",
            "周婷",
            "李经理",
            "2025-08-07",
            ("13:00", "20:00"),
            ("广州", "天河区花城大道85号"),
            ("300", "80-150"),
            "自然中分长发",
            &[],
            "女性，皮肤状态好，适合特写镜头",
            "兰蔻护肤品柜台宣传活动",
        ),
        order(
            "雅诗兰黛",
            "Lucy",
            "Jane Smith",
            "2025-08-10",
            ("09:30", "18:30"),
            ("深圳", "南山区深南大道9028号"),
            ("1000", "300-800"),
            "短发利落造型，可接受现场修剪",
            &["el_ref.jpg"],
            "女性，身高165cm以上，有平面拍摄经验",
            "雅诗兰黛年度形象大片拍摄",
        ),
        order(
            "资生堂",
            "阿豪",
            "王总监",
            "2025-08-11",
            ("14:00", "17:00"),
            ("杭州", "西湖区延安路98号"),
            ("200", "50-100"),
            "日系轻盈发型",
            &[],
            "不限性别，年龄18-28岁",
            "资生堂快闪店现场互动模特",
        ),
        order(
            "迪奥",
            "Vivian",
            "李经理",
            "2025-08-15",
            ("11:00", "19:00"),
            ("成都", "锦江区红星路三段1号"),
            ("800", "200-400"),
            "复古红毯造型，发型师现场定妆",
            &["dior1.jpg", "dior2.jpg"],
            "女性，身高170cm以上，走秀经验两年以上",
            "迪奥西南区品鉴会走秀",
        ),
        order(
            "悦诗风吟",
            "小鹿",
            "John Doe",
            "2025-08-25",
            ("10:00", "15:00"),
            ("南京", "玄武区中山路18号"),
            ("300", "60-120"),
            "清新马尾或丸子头",
            &[],
            "女性，学生气质，上镜亲和",
            "悦诗风吟校园推广活动",
        ),
        order(
            "珀莱雅",
            "大壮",
            "王总监",
            "2025-09-02",
            ("09:00", "12:00"),
            ("武汉", "江汉区解放大道690号"),
            ("600", "150-300"),
            "湿发质感造型",
            &["proya_mood.jpg"],
            "男性，身高180cm以上，健身体型",
            "珀莱雅男士系列短视频拍摄",
        ),
        order(
            "自然堂",
            "芳芳",
            "Jane Smith",
            "2025-09-10",
            ("13:30", "18:00"),
            ("重庆", "渝中区解放碑步行街66号"),
            ("面议", "100-200"),
            "自然披肩发",
            &[],
            "女性，年龄不限，笑容有感染力",
            "自然堂门店周年庆典活动",
        ),
    ]
}
